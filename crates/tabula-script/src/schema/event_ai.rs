//! EventAI event and action definitions
//!
//! Names the numeric `event_type` and `actionN_type` values found in
//! `creature_ai_scripts` rows.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One event or action type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAiDef {
    /// Numeric type id as stored in the database
    pub id: u32,
    /// Short display name
    pub name: String,
    /// Tooltip text
    #[serde(default)]
    pub description: String,
    /// Labels for the type's parameters, in order
    #[serde(default)]
    pub params: Vec<String>,
}

/// All known event and action types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventAiDefs {
    #[serde(default)]
    pub events: Vec<EventAiDef>,
    #[serde(default)]
    pub actions: Vec<EventAiDef>,
}

impl EventAiDefs {
    /// Create empty definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Event type by id
    pub fn event(&self, id: i64) -> Option<&EventAiDef> {
        self.events.iter().find(|e| i64::from(e.id) == id)
    }

    /// Action type by id
    pub fn action(&self, id: i64) -> Option<&EventAiDef> {
        self.actions.iter().find(|a| i64::from(a.id) == id)
    }

    /// Display name of an event type
    pub fn event_name(&self, id: i64) -> Option<&str> {
        self.event(id).map(|e| e.name.as_str())
    }

    /// Display name of an action type
    pub fn action_name(&self, id: i64) -> Option<&str> {
        self.action(id).map(|a| a.name.as_str())
    }

    /// Add another set of definitions, rejecting id clashes.
    ///
    /// Nothing is added when any id clashes.
    pub fn merge(&mut self, other: EventAiDefs) -> Result<()> {
        if let Some(id) = first_clash(&self.events, &other.events) {
            return Err(Error::DuplicateDefinition(format!("event {}", id)));
        }
        if let Some(id) = first_clash(&self.actions, &other.actions) {
            return Err(Error::DuplicateDefinition(format!("action {}", id)));
        }
        self.events.extend(other.events);
        self.actions.extend(other.actions);
        Ok(())
    }
}

/// First incoming id already present or repeated within `incoming`
fn first_clash(existing: &[EventAiDef], incoming: &[EventAiDef]) -> Option<u32> {
    incoming.iter().enumerate().find_map(|(i, def)| {
        let taken = existing.iter().chain(&incoming[..i]).any(|d| d.id == def.id);
        taken.then_some(def.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFS: &str = r#"
    (
        events: [
            (id: 0, name: "Timer (combat)", description: "Repeats while in combat",
             params: ["InitialMin", "InitialMax", "RepeatMin", "RepeatMax"]),
            (id: 6, name: "Death"),
        ],
        actions: [
            (id: 1, name: "Text"),
            (id: 11, name: "Cast"),
        ],
    )
    "#;

    #[test]
    fn test_event_ai_ron() {
        let defs: EventAiDefs = ron::from_str(DEFS).unwrap();
        assert_eq!(defs.event_name(6), Some("Death"));
        assert_eq!(defs.action_name(11), Some("Cast"));
        assert_eq!(defs.event(0).map(|e| e.params.len()), Some(4));
        assert!(defs.event(99).is_none());
        assert!(defs.action(-1).is_none());
    }

    #[test]
    fn test_merge_rejects_duplicates() {
        let mut defs: EventAiDefs = ron::from_str(DEFS).unwrap();
        let more: EventAiDefs = ron::from_str("(events: [(id: 1, name: \"Timer (ooc)\")])").unwrap();
        defs.merge(more).unwrap();
        assert_eq!(defs.event_name(1), Some("Timer (ooc)"));

        let clash: EventAiDefs = ron::from_str("(actions: [(id: 1, name: \"Say\")])").unwrap();
        assert!(matches!(defs.merge(clash), Err(Error::DuplicateDefinition(_))));
    }

    #[test]
    fn test_failed_merge_adds_nothing() {
        let mut defs: EventAiDefs = ron::from_str(DEFS).unwrap();
        let partial: EventAiDefs = ron::from_str(
            "(events: [(id: 2, name: \"Health\")], actions: [(id: 12, name: \"Summon\"), (id: 11, name: \"Cast again\")])",
        )
        .unwrap();
        assert!(matches!(defs.merge(partial), Err(Error::DuplicateDefinition(_))));
        assert!(defs.event(2).is_none());
        assert!(defs.action(12).is_none());
        assert_eq!(defs.action_name(11), Some("Cast"));

        let repeated: EventAiDefs =
            ron::from_str("(events: [(id: 3, name: \"A\"), (id: 3, name: \"B\")])").unwrap();
        assert!(matches!(defs.merge(repeated), Err(Error::DuplicateDefinition(_))));
        assert!(defs.event(3).is_none());
    }
}
