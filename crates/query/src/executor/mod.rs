//! Execution boundary
//!
//! The core never runs SQL itself. It hands a [`PreparedQuery`] (statement
//! text, bound values, statement-kind tag) to an [`ExecutionInvoker`] and
//! treats the returned [`ExecutionOutcome`] as opaque: an engine-reported
//! error travels back verbatim, never reinterpreted or retried.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::QueryResult;
use crate::model::StatementKind;

pub mod postgres;

pub use postgres::PostgresInvoker;

/// Generated statement plus the values to bind, tagged with its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedQuery {
    pub sql: String,
    pub params: Vec<String>,
    pub kind: StatementKind,
}

impl PreparedQuery {
    /// True when there is nothing to execute (no tables selected)
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Result shape returned by an execution engine
///
/// `error` carries the engine's message verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, JsonValue>>,
    pub execution_time_ms: u64,
    pub affected_rows: Option<u64>,
    pub error: Option<String>,
}

/// Abstract execution engine
///
/// `Err` is reserved for transport-level failures; SQL-level failures come
/// back as `Ok` with `outcome.error` set.
#[async_trait]
pub trait ExecutionInvoker: Send + Sync {
    async fn execute(&self, query: &PreparedQuery) -> QueryResult<ExecutionOutcome>;
}
