//! Registry of known world database tables.

mod creature;
mod world;

pub use creature::*;
pub use world::*;

use crate::error::{Error, Result};
use tabula_core::TableDescriptor;

/// Every registered table.
pub static ALL: &[&TableDescriptor] = &[
    &CREATURE_TEMPLATE,
    &CREATURE,
    &CREATURE_AI_SCRIPTS,
    &CREATURE_EQUIP_TEMPLATE,
    &CREATURE_EQUIP_TEMPLATE_RAW,
    &CREATURE_TEMPLATE_ADDON,
    &CREATURE_ADDON,
    &CREATURE_MODEL_INFO,
    &ITEM_TEMPLATE,
    &MAP_TEMPLATE,
];

/// Find a table by name.
pub fn lookup(name: &str) -> Option<&'static TableDescriptor> {
    ALL.iter().copied().find(|t| t.name == name)
}

/// Find a table by name or fail with `UnknownTable`.
pub fn require(name: &str) -> Result<&'static TableDescriptor> {
    lookup(name).ok_or_else(|| Error::UnknownTable(name.to_string()))
}
