//! Static spell list

use serde::{Deserialize, Serialize};
use tabula_core::{SpellInfo, SpellProvider};

/// Spell provider backed by a list loaded from RON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticSpells {
    #[serde(default)]
    pub spells: Vec<SpellInfo>,
}

impl StaticSpells {
    pub fn new(spells: Vec<SpellInfo>) -> Self {
        Self { spells }
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellProvider for StaticSpells {
    fn list_all(&self) -> Vec<&SpellInfo> {
        self.spells.iter().collect()
    }

    fn get_by_id(&self, id: u32) -> Option<&SpellInfo> {
        self.spells.iter().find(|s| s.id == id)
    }

    fn get_by_name(&self, name: &str) -> Vec<&SpellInfo> {
        self.spells
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name))
            .collect()
    }
}
