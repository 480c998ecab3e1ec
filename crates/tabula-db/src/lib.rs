//! Tabula DB - Relational lookups over a game world database
//!
//! Provides:
//! - A `Session` owning the single SQLite connection
//! - A `QueryEngine` for single-table lookups by key
//! - The registry of known world tables (`tables`)
//! - `Template` aggregates assembled from an `EntityCatalog`

mod error;
mod query;
mod session;
pub mod tables;
mod template;

#[cfg(test)]
mod fixtures;

pub use error::{Error, Result};
pub use query::{quote_identifier, select_statement, Expect, QueryEngine};
pub use session::{AttachedDb, Session, SessionConfig};
pub use template::{Related, Template};
