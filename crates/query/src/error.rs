//! Error types for the query console core
//!
//! Generation itself is total and never fails; errors arise only at the
//! boundaries (validation before dispatch, execution, catalog, persistence).

use querydesk_schema::CatalogError;

/// Result type alias for console core operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query console operations
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Statement text rejected before dispatch
    #[error("validation error: {0}")]
    Validation(String),

    /// Execution engine transport failure
    #[error("execution error: {0}")]
    Execution(String),

    /// Schema catalog failure
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Saved query store failure
    #[error("saved query store error: {0}")]
    Store(String),

    /// Model serialization failure
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<CatalogError> for QueryError {
    fn from(err: CatalogError) -> Self {
        QueryError::Catalog(err.to_string())
    }
}

impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        QueryError::Execution(err.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Serialization(err.to_string())
    }
}
