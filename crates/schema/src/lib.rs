//! Schema catalog for the querydesk console
//!
//! Exposes table and column metadata to the query-building core. The core
//! only ever reads this interface; staleness and caching are the backend's
//! problem, not ours.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod postgres;

pub use postgres::PostgresCatalog;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog query failed: {0}")]
    Introspection(String),

    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::Introspection(err.to_string())
    }
}

/// One column of a browsable table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
}

/// One browsable table with its columns and an estimated row count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub row_count: i64,
    pub columns: Vec<ColumnSchema>,
}

/// Abstract schema catalog
///
/// Implementations enumerate the tables a query may reference. The console
/// populates its table and column pickers from this list.
#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// List every browsable table with its column metadata
    async fn list_tables(&self) -> CatalogResult<Vec<TableSchema>>;
}

/// Fixed, in-memory catalog
///
/// Used in tests and anywhere the schema is known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tables: Vec<TableSchema>,
}

impl StaticCatalog {
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl SchemaCatalog for StaticCatalog {
    async fn list_tables(&self) -> CatalogResult<Vec<TableSchema>> {
        Ok(self.tables.clone())
    }
}
