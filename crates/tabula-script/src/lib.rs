//! Tabula Script - RON loader and schema definitions
//!
//! Loads editor content from RON files:
//! - Editor configuration (database connection, file locations)
//! - Entity catalogs describing which tables hang off a root table
//! - EventAI event and action names
//! - A static spell list

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::{EditorDefs, Loader};
pub use schema::{EditorConfig, EventAiDef, EventAiDefs, StaticSpells};
