//! Error types for database operations.

use thiserror::Error;

/// Errors that can occur while querying or assembling templates.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup was attempted with an absent or null key.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The driver rejected or failed the statement.
    #[error("Query execution error: {0}")]
    QueryExecution(String),

    /// A strict query did not return exactly the expected number of rows.
    #[error("Query on {table} returned {found} result(s), expected {expected}")]
    Cardinality {
        table: String,
        expected: usize,
        found: usize,
    },

    /// Table name missing from the registry.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Role missing from the catalog.
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    /// Operation not valid for this kind of relation.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Record construction error.
    #[error("Record error: {0}")]
    Record(#[from] tabula_core::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::QueryExecution(err.to_string())
    }
}
