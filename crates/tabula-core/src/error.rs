//! Error types for tabula-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Invalid field name: {0:?}")]
    InvalidField(String),

    #[error("Duplicate field {field} in record of {table}")]
    DuplicateField { table: String, field: String },

    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
