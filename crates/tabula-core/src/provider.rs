//! Auxiliary spell-data capability
//!
//! Spell data comes from client files rather than the world database, so it
//! is consumed through a trait. Loading a concrete provider is the
//! application's job.

use serde::{Deserialize, Serialize};

/// Reference to a spell icon, resolved by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef(pub u32);

/// Summary of one spell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub icon: Option<u32>,
}

/// A source of spell information
pub trait SpellProvider {
    /// All known spells
    fn list_all(&self) -> Vec<&SpellInfo>;

    /// Spell by id
    fn get_by_id(&self, id: u32) -> Option<&SpellInfo>;

    /// Spells whose name matches exactly, ignoring case
    fn get_by_name(&self, name: &str) -> Vec<&SpellInfo>;

    /// Icon for a spell, if it has one
    fn icon_for(&self, id: u32) -> Option<IconRef> {
        self.get_by_id(id).and_then(|s| s.icon).map(IconRef)
    }
}
