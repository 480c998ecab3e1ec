//! Tabula Tree - editable tree adapter over template records
//!
//! Turns a [`tabula_db::Template`] into a root / table group / field leaf
//! hierarchy with pending edits, dirty tracking and a text filter, and
//! exposes it to a front end through [`TreeModel`].

mod error;
mod model;
mod node;
mod tree;

pub use error::{Error, Result};
pub use model::{ItemFlags, ModelIndex, TreeModel, HEADERS};
pub use node::{NodeId, NodeKind};
pub use tree::{Change, TemplateTree, COLUMN_COUNT, LABEL_COLUMN, VALUE_COLUMN};
