//! Schema definitions for RON files

pub mod config;
pub mod event_ai;
pub mod spell;

pub use config::EditorConfig;
pub use event_ai::{EventAiDef, EventAiDefs};
pub use spell::StaticSpells;
