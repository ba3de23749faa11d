//! # querydesk-query: visual query builder core
//!
//! The query-building heart of the querydesk admin console: a structured,
//! serializable model of one query under construction, total mutation
//! operations for every clause the editing form touches, and deterministic
//! SQL rendering. Schema metadata, execution, and persistence stay behind
//! injected trait objects.

pub mod builder;
pub mod error;
pub mod executor;
pub mod model;
pub mod security;
pub mod session;
pub mod sql;
pub mod store;


// Re-export the types a console frontend works with
pub use builder::{ConditionPatch, JoinPatch, OrderPatch};
pub use error::{QueryError, QueryResult};
pub use executor::{ExecutionInvoker, ExecutionOutcome, PostgresInvoker, PreparedQuery};
pub use model::{
    Assignment, Condition, ConditionOperator, EntryId, Join, JoinType, LogicalConnector,
    OrderDirection, OrderKey, QueryModel, StatementKind,
};
pub use session::QuerySession;
pub use store::{MemoryQueryStore, SavedQueryStore};
