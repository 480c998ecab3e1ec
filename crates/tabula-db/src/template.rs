//! Template aggregates: a root row plus every related row.

use crate::error::{Error, Result};
use crate::query::{Expect, QueryEngine};
use crate::tables;
use indexmap::IndexMap;
use tabula_core::{Cardinality, EntityCatalog, Field, OwnerKey, Record, Value};
use tracing::info;

/// Rows resolved for one relation
#[derive(Debug, Clone, PartialEq)]
pub enum Related {
    /// A to-one relation; may be the empty sentinel
    One(Record),
    /// A to-many relation
    Many(Vec<Record>),
}

impl Related {
    /// Non-empty records of this relation
    pub fn records(&self) -> &[Record] {
        match self {
            Related::One(record) if record.is_empty() => &[],
            Related::One(record) => std::slice::from_ref(record),
            Related::Many(records) => records,
        }
    }

    /// Number of non-empty records
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Check whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_records(self) -> Vec<Record> {
        match self {
            Related::One(record) if record.is_empty() => Vec::new(),
            Related::One(record) => vec![record],
            Related::Many(records) => records,
        }
    }
}

/// The composite view of one entity.
///
/// Built in one go from a catalog; a build either yields the full aggregate
/// or an error, never a partially populated template.
#[derive(Debug, Clone)]
pub struct Template {
    catalog: EntityCatalog,
    key: Value,
    root: Record,
    relations: IndexMap<String, Related>,
}

impl Template {
    /// Query the root row and then every relation of `catalog`.
    ///
    /// The root query is strict and runs first. Any failure aborts the build.
    pub fn build(
        engine: &QueryEngine<'_>,
        catalog: &EntityCatalog,
        key: impl Into<Value>,
    ) -> Result<Self> {
        let key = key.into();
        let root_table = tables::require(&catalog.root_table)?;
        let root = engine.query_one(root_table, &catalog.root_key, &key, true)?;

        let mut relations = IndexMap::with_capacity(catalog.relations.len());
        for relation in &catalog.relations {
            let table = tables::require(&relation.table)?;
            let owner = match &relation.owner {
                OwnerKey::RootKey => key.clone(),
                OwnerKey::Field(name) => root
                    .value(name)
                    .cloned()
                    .ok_or_else(|| tabula_core::Error::FieldNotFound(name.clone()))?,
            };

            // A null foreign key means "not set": nothing to look up.
            let related = match relation.cardinality {
                Cardinality::Many if owner.is_null() => Related::Many(Vec::new()),
                Cardinality::Many => {
                    Related::Many(engine.query(table, &relation.target_key, &owner, Expect::Any)?)
                }
                Cardinality::One if owner.is_null() => Related::One(Record::empty()),
                Cardinality::One => {
                    Related::One(engine.query_one(table, &relation.target_key, &owner, false)?)
                }
            };
            relations.insert(relation.role.clone(), related);
        }

        let template = Self {
            catalog: catalog.clone(),
            key,
            root,
            relations,
        };
        info!(
            catalog = %template.catalog.name,
            key = %template.key,
            groups = template.groups().count(),
            "template built"
        );
        Ok(template)
    }

    /// The catalog this template was built from
    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    /// The entity key
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// The root row
    pub fn root(&self) -> &Record {
        &self.root
    }

    /// Resolved rows for a role
    pub fn relation(&self, role: &str) -> Option<&Related> {
        self.relations.get(role)
    }

    /// Non-empty records for a role; empty for unknown roles
    pub fn records(&self, role: &str) -> &[Record] {
        self.relations.get(role).map(Related::records).unwrap_or(&[])
    }

    /// `(role, record)` pairs in declaration order, root first.
    ///
    /// Empty sentinels are skipped. The root's role is the catalog name.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        std::iter::once((self.catalog.name.as_str(), &self.root)).chain(
            self.relations
                .iter()
                .flat_map(|(role, related)| related.records().iter().map(move |r| (role.as_str(), r))),
        )
    }

    /// Owned form of `groups`
    pub fn into_groups(self) -> Vec<(String, Record)> {
        let mut groups = vec![(self.catalog.name, self.root)];
        for (role, related) in self.relations {
            groups.extend(related.into_records().into_iter().map(|r| (role.clone(), r)));
        }
        groups
    }

    /// Append a new, unsaved row to a to-many relation.
    ///
    /// Every column of the target table gets its type's zero value except
    /// the primary key and the relation's target key, which the caller
    /// supplies. Nothing is queried or written.
    pub fn append_row(
        &mut self,
        role: &str,
        primary_key: impl Into<Value>,
        owner_key: impl Into<Value>,
    ) -> Result<&mut Record> {
        let relation = self
            .catalog
            .relation(role)
            .ok_or_else(|| Error::UnknownRelation(role.to_string()))?;
        if relation.cardinality != Cardinality::Many {
            return Err(Error::InvalidTarget(format!(
                "cannot append to to-one relation {}",
                role
            )));
        }
        let table = tables::require(&relation.table)?;

        let primary_key = primary_key.into();
        let owner_key = owner_key.into();
        let mut record = Record::new(table.name, table.primary_key);
        for column in table.columns {
            let value = if column.name == table.primary_key {
                primary_key.clone()
            } else if column.name == relation.target_key {
                owner_key.clone()
            } else {
                column.field_type.default_value()
            };
            record.push_field(Field::new(column.name, value, column.field_type))?;
        }

        match self.relations.get_mut(role) {
            Some(Related::Many(rows)) => {
                rows.push(record);
                let last = rows.len() - 1;
                Ok(&mut rows[last])
            }
            _ => Err(Error::UnknownRelation(role.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::world;
    use tabula_core::{FieldType, Relation};

    #[test]
    fn test_build_test_mob() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let template = Template::build(&engine, &EntityCatalog::creature_template(), 1000).unwrap();

        assert_eq!(template.root().value("name"), Some(&Value::Text("Test Mob".into())));
        assert_eq!(template.records("ai scripts").len(), 2);
        assert_eq!(template.records("model slot 1").len(), 1);
        for slot in 2..=4 {
            let related = template.relation(&format!("model slot {}", slot)).unwrap();
            assert_eq!(related, &Related::One(Record::empty()));
        }
        assert!(template.records("equipment").is_empty());
        assert!(template.records("creature").is_empty());

        // root, 8 relations
        assert_eq!(session.queries_issued(), 9);
        // template row, two scripts, one model
        assert_eq!(template.groups().count(), 4);
    }

    #[test]
    fn test_missing_root_fails_before_relations() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let result = Template::build(&engine, &EntityCatalog::creature_template(), 4242);
        assert!(matches!(result, Err(Error::Cardinality { found: 0, .. })));
        assert_eq!(session.queries_issued(), 1);
    }

    #[test]
    fn test_null_root_key() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let result = Template::build(&engine, &EntityCatalog::creature_template(), Value::Null);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(session.queries_issued(), 0);
    }

    #[test]
    fn test_null_foreign_key_skips_query() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let template = Template::build(&engine, &EntityCatalog::creature_template(), 1002).unwrap();
        assert_eq!(template.relation("equipment"), Some(&Related::One(Record::empty())));
        // equipment_id is NULL, so only 8 statements
        assert_eq!(session.queries_issued(), 8);
        assert_eq!(template.groups().count(), 1);
    }

    #[test]
    fn test_build_armed_mob() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let template = Template::build(&engine, &EntityCatalog::creature_template(), 1001).unwrap();

        let equipment = template.records("equipment");
        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].value("equipentry1"), Some(&Value::Int(1899)));
        assert_eq!(template.records("creature").len(), 2);
        assert_eq!(template.records("template addon").len(), 1);
        assert_eq!(template.records("model slot 2")[0].primary_key(), Some(&Value::Int(502)));

        let roles: Vec<&str> = template.groups().map(|(role, _)| role).collect();
        assert_eq!(
            roles,
            vec![
                "creature_template",
                "creature",
                "creature",
                "equipment",
                "template addon",
                "model slot 1",
                "model slot 2",
            ]
        );
    }

    #[test]
    fn test_relation_error_aborts_build() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let catalog = EntityCatalog::creature_template().with(Relation::one(
            "broken",
            "creature_addon",
            "guid",
            OwnerKey::RootKey,
        ));
        // creature_addon is registered but absent from the fixture database
        let result = Template::build(&engine, &catalog, 1000);
        assert!(matches!(result, Err(Error::QueryExecution(_))));
    }

    #[test]
    fn test_bad_target_key_aborts_build() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let catalog = EntityCatalog::new("t", "creature_template", "entry").with(Relation::one(
            "slot",
            "creature_model_info",
            "model_id",
            OwnerKey::Field("modelid_1".into()),
        ));
        let result = Template::build(&engine, &catalog, 1000);
        assert!(matches!(result, Err(Error::QueryExecution(_))));
    }

    #[test]
    fn test_missing_owner_field() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let catalog = EntityCatalog::new("t", "creature_template", "entry").with(Relation::one(
            "spells",
            "creature_model_info",
            "modelid",
            OwnerKey::Field("spell1".into()),
        ));
        let result = Template::build(&engine, &catalog, 1000);
        assert!(matches!(result, Err(Error::Record(_))));
    }

    #[test]
    fn test_append_row() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let mut template =
            Template::build(&engine, &EntityCatalog::creature_template(), 1000).unwrap();
        let before = session.queries_issued();

        let row = template.append_row("ai scripts", 100003, 1000).unwrap();
        assert_eq!(row.source_table(), "creature_ai_scripts");
        assert_eq!(row.primary_key(), Some(&Value::Int(100003)));
        assert_eq!(row.value("creature_id"), Some(&Value::Int(1000)));
        assert_eq!(row.value("event_type"), Some(&Value::Int(0)));
        assert_eq!(row.value("action3_param3"), Some(&Value::Int(0)));
        assert_eq!(row.value("comment"), Some(&Value::Text(String::new())));
        assert_eq!(row.field("comment").map(|f| f.declared_type), Some(FieldType::Text));

        assert_eq!(template.records("ai scripts").len(), 3);
        assert_eq!(session.queries_issued(), before);
    }

    #[test]
    fn test_append_row_rejects_bad_targets() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let mut template =
            Template::build(&engine, &EntityCatalog::creature_template(), 1000).unwrap();
        assert!(matches!(
            template.append_row("equipment", 1, 1000),
            Err(Error::InvalidTarget(_))
        ));
        assert!(matches!(
            template.append_row("loot", 1, 1000),
            Err(Error::UnknownRelation(_))
        ));
    }

    #[test]
    fn test_into_groups() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let template = Template::build(&engine, &EntityCatalog::creature_template(), 1000).unwrap();
        let groups = template.into_groups();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].1.source_table(), "creature_template");
        assert_eq!(groups[1].0, "ai scripts");
        assert_eq!(groups[3].0, "model slot 1");
    }
}
