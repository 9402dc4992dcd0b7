//! Error types for the query engine.

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building or running a query.
///
/// Malformed sort or filter encodings and unknown columns are not errors;
/// they degrade to permissive defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page number or page size out of range.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
