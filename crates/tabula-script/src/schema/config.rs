//! Editor configuration schema

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tabula_db::SessionConfig;

/// Root configuration of an editing session
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// World database connection
    #[serde(default)]
    pub session: SessionConfig,
    /// Include the built-in creature catalog
    #[serde(default = "default_builtin")]
    pub builtin_catalogs: bool,
    /// Catalog files or directories
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,
    /// EventAI event/action definitions
    #[serde(default)]
    pub event_ai: Option<PathBuf>,
    /// Spell list for the static spell provider
    #[serde(default)]
    pub spells: Option<PathBuf>,
}

fn default_builtin() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            builtin_catalogs: default_builtin(),
            catalogs: Vec::new(),
            event_ai: None,
            spells: None,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from a RON string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Load a configuration file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::parse(&fs::read_to_string(path)?)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Make every relative path absolute with respect to `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(db) = self.session.path.as_mut() {
            resolve(db);
        }
        for db in &mut self.session.attach {
            resolve(&mut db.path);
        }
        for p in &mut self.catalogs {
            resolve(p);
        }
        if let Some(p) = self.event_ai.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.spells.as_mut() {
            resolve(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_ron() {
        let ron_str = r#"
        (
            session: (
                path: Some("world.sqlite"),
                world_db: "mangos",
                attach: [(schema: "mangos", path: "mangos.sqlite")],
            ),
            catalogs: ["catalogs"],
            event_ai: Some("eventai.ron"),
        )
        "#;

        let mut config = EditorConfig::parse(ron_str).unwrap();
        assert!(config.builtin_catalogs);
        assert_eq!(config.session.world_db, "mangos");
        assert!(config.spells.is_none());

        config.resolve_relative_to(Path::new("/etc/tabula"));
        assert_eq!(
            config.session.path,
            Some(PathBuf::from("/etc/tabula/world.sqlite"))
        );
        assert_eq!(
            config.session.attach[0].path,
            PathBuf::from("/etc/tabula/mangos.sqlite")
        );
        assert_eq!(config.catalogs, vec![PathBuf::from("/etc/tabula/catalogs")]);
        assert_eq!(config.event_ai, Some(PathBuf::from("/etc/tabula/eventai.ron")));
    }

    #[test]
    fn test_empty_config() {
        let config = EditorConfig::parse("()").unwrap();
        assert!(config.builtin_catalogs);
        assert!(EditorConfig::default().builtin_catalogs);
        assert!(config.session.path.is_none());
        assert_eq!(config.session.world_db, "main");
    }
}
