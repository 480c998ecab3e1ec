//! RON loader for catalogs and content definitions

use crate::error::{Error, Result};
use crate::schema::{EditorConfig, EventAiDefs, StaticSpells};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tabula_core::EntityCatalog;
use tabula_db::tables;
use tracing::debug;

/// Everything an editing session loads up front
#[derive(Debug, Default)]
pub struct EditorDefs {
    /// Entity catalogs by name, in load order
    pub catalogs: IndexMap<String, EntityCatalog>,
    /// EventAI type names
    pub event_ai: EventAiDefs,
    /// Spell data
    pub spells: StaticSpells,
}

impl EditorDefs {
    /// Create empty definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a catalog by name
    pub fn catalog(&self, name: &str) -> Option<&EntityCatalog> {
        self.catalogs.get(name)
    }
}

/// Loader for RON definition files
pub struct Loader {
    defs: EditorDefs,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            defs: EditorDefs::new(),
        }
    }

    /// Load everything a configuration points at
    pub fn from_config(config: &EditorConfig) -> Result<EditorDefs> {
        let mut loader = Self::new();
        if config.builtin_catalogs {
            loader.add_catalog(EntityCatalog::creature_template())?;
        }
        for path in &config.catalogs {
            if path.is_dir() {
                loader.load_directory(path)?;
            } else {
                loader.load_file(path)?;
            }
        }
        if let Some(path) = &config.event_ai {
            loader.load_event_ai_str(&fs::read_to_string(path)?)?;
        }
        if let Some(path) = &config.spells {
            loader.load_spells_str(&fs::read_to_string(path)?)?;
        }
        Ok(loader.finish())
    }

    /// Register a catalog after checking it against the table registry.
    pub fn add_catalog(&mut self, catalog: EntityCatalog) -> Result<()> {
        if self.defs.catalogs.contains_key(&catalog.name) {
            return Err(Error::DuplicateDefinition(catalog.name));
        }
        if let Some(role) = catalog.duplicate_role() {
            return Err(Error::InvalidSchema(format!(
                "catalog {} declares role {:?} twice",
                catalog.name, role
            )));
        }

        let root = tables::lookup(&catalog.root_table)
            .ok_or_else(|| Error::UnknownTable(catalog.root_table.clone()))?;
        if !root.has_column(&catalog.root_key) {
            return Err(Error::InvalidSchema(format!(
                "{} has no column {}",
                root.name, catalog.root_key
            )));
        }
        for relation in &catalog.relations {
            let table = tables::lookup(&relation.table)
                .ok_or_else(|| Error::UnknownTable(relation.table.clone()))?;
            if !table.has_column(&relation.target_key) {
                return Err(Error::InvalidSchema(format!(
                    "{} has no column {} (role {:?})",
                    table.name, relation.target_key, relation.role
                )));
            }
        }

        debug!(
            catalog = %catalog.name,
            relations = catalog.relations.len(),
            "catalog registered"
        );
        self.defs.catalogs.insert(catalog.name.clone(), catalog);
        Ok(())
    }

    /// Load a single RON file, picking the format from its content
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = fs::read_to_string(path.as_ref())?;

        if content.contains("catalogs:") {
            self.load_catalogs_str(&content)
        } else if content.contains("events:") || content.contains("actions:") {
            self.load_event_ai_str(&content)
        } else if content.contains("spells:") {
            self.load_spells_str(&content)
        } else {
            self.load_catalog_str(&content)
        }
    }

    /// Load a list of catalogs from a RON string
    pub fn load_catalogs_str(&mut self, content: &str) -> Result<()> {
        #[derive(serde::Deserialize)]
        struct CatalogFile {
            catalogs: Vec<EntityCatalog>,
        }

        let file: CatalogFile = ron::from_str(content)?;
        for catalog in file.catalogs {
            self.add_catalog(catalog)?;
        }
        Ok(())
    }

    /// Load a single catalog from a RON string
    pub fn load_catalog_str(&mut self, content: &str) -> Result<()> {
        let catalog: EntityCatalog = ron::from_str(content)?;
        self.add_catalog(catalog)
    }

    /// Load EventAI definitions from a RON string
    pub fn load_event_ai_str(&mut self, content: &str) -> Result<()> {
        let defs: EventAiDefs = ron::from_str(content)?;
        self.defs.event_ai.merge(defs)
    }

    /// Load spells from a RON string
    pub fn load_spells_str(&mut self, content: &str) -> Result<()> {
        let file: StaticSpells = ron::from_str(content)?;
        for (i, spell) in file.spells.iter().enumerate() {
            let taken = self
                .defs
                .spells
                .spells
                .iter()
                .chain(&file.spells[..i])
                .any(|s| s.id == spell.id);
            if taken {
                return Err(Error::DuplicateDefinition(format!("spell {}", spell.id)));
            }
        }
        self.defs.spells.spells.extend(file.spells);
        Ok(())
    }

    /// Load all RON files from a directory, recursively
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the definitions
    pub fn finish(self) -> EditorDefs {
        self.defs
    }

    /// Get the current definitions (for inspection during loading)
    pub fn defs(&self) -> &EditorDefs {
        &self.defs
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
