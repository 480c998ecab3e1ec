//! Tabula Core - Records, values and relations for content editing
//!
//! This crate provides the data model shared by the rest of tabula:
//! - Dynamic scalar values (`Value`) and their declared type tags (`FieldType`)
//! - Row snapshots (`Record`) made of ordered, named `Field`s
//! - Compile-time table metadata (`TableDescriptor`)
//! - Declarative relation catalogs (`EntityCatalog`, `Relation`)
//! - The auxiliary spell-data capability (`SpellProvider`)
//!
//! Nothing in here talks to a database. Querying lives in `tabula-db`,
//! presentation in `tabula-tree`.

mod descriptor;
mod error;
mod provider;
mod record;
mod relation;
mod value;

pub use descriptor::{ColumnDef, TableDescriptor};
pub use error::{Error, Result};
pub use provider::{IconRef, SpellInfo, SpellProvider};
pub use record::{Field, Record};
pub use relation::{Cardinality, EntityCatalog, OwnerKey, Relation};
pub use value::{FieldType, Value};
