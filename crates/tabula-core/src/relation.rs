//! Declarative relation catalogs
//!
//! A catalog names a root table and the tables hanging off it. It is plain
//! data: adding an entity kind means writing a catalog, not code.

use serde::{Deserialize, Serialize};

/// How many target rows a relation resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// Zero or one row; zero is a valid state
    One,
    /// Any number of rows
    Many,
}

/// Where a relation takes its lookup value from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnerKey {
    /// The root record's primary-key value
    #[default]
    RootKey,
    /// The value of a named column of the root record
    Field(String),
}

/// A foreign-key style link from the root entity to a target table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Role label, unique within a catalog (e.g. "model slot 2")
    pub role: String,
    /// Target table
    pub table: String,
    /// Column of the target table matched against the owner value
    pub target_key: String,
    /// Source of the lookup value
    #[serde(default)]
    pub owner: OwnerKey,
    /// Relation cardinality
    pub cardinality: Cardinality,
}

impl Relation {
    /// Create a to-one relation
    pub fn one(
        role: impl Into<String>,
        table: impl Into<String>,
        target_key: impl Into<String>,
        owner: OwnerKey,
    ) -> Self {
        Self {
            role: role.into(),
            table: table.into(),
            target_key: target_key.into(),
            owner,
            cardinality: Cardinality::One,
        }
    }

    /// Create a to-many relation
    pub fn many(
        role: impl Into<String>,
        table: impl Into<String>,
        target_key: impl Into<String>,
        owner: OwnerKey,
    ) -> Self {
        Self {
            role: role.into(),
            table: table.into(),
            target_key: target_key.into(),
            owner,
            cardinality: Cardinality::Many,
        }
    }
}

/// The relation set for one entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCatalog {
    /// Catalog name
    pub name: String,
    /// Table holding the root row
    pub root_table: String,
    /// Column of the root table matched against the entity key
    pub root_key: String,
    /// Relations in declaration order
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl EntityCatalog {
    /// Create a catalog without relations
    pub fn new(
        name: impl Into<String>,
        root_table: impl Into<String>,
        root_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            root_table: root_table.into(),
            root_key: root_key.into(),
            relations: Vec::new(),
        }
    }

    /// Add a relation
    pub fn with(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Get a relation by role
    pub fn relation(&self, role: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.role == role)
    }

    /// First role that appears more than once, if any
    pub fn duplicate_role(&self) -> Option<&str> {
        self.relations.iter().enumerate().find_map(|(i, r)| {
            self.relations[..i]
                .iter()
                .any(|prev| prev.role == r.role)
                .then_some(r.role.as_str())
        })
    }

    /// The creature template catalog
    pub fn creature_template() -> Self {
        let mut catalog = Self::new("creature_template", "creature_template", "entry")
            .with(Relation::many("creature", "creature", "id", OwnerKey::RootKey))
            .with(Relation::many(
                "ai scripts",
                "creature_ai_scripts",
                "creature_id",
                OwnerKey::RootKey,
            ))
            .with(Relation::one(
                "equipment",
                "creature_equip_template",
                "entry",
                OwnerKey::Field("equipment_id".into()),
            ))
            .with(Relation::one(
                "template addon",
                "creature_template_addon",
                "entry",
                OwnerKey::RootKey,
            ));
        for slot in 1..=4 {
            catalog = catalog.with(Relation::one(
                format!("model slot {}", slot),
                "creature_model_info",
                "modelid",
                OwnerKey::Field(format!("modelid_{}", slot)),
            ));
        }
        catalog
    }
}
