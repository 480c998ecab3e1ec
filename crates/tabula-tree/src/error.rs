//! Error types for tabula-tree

use thiserror::Error;

/// Tree operation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Record error: {0}")]
    Record(#[from] tabula_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
