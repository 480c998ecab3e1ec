//! Row snapshots

use crate::error::{Error, Result};
use crate::value::{FieldType, Value};
use serde::{Deserialize, Serialize};

/// A named, typed cell of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column name
    pub name: String,
    /// Cell value
    pub value: Value,
    /// Declared column type
    pub declared_type: FieldType,
}

impl Field {
    /// Create a new field
    pub fn new(name: impl Into<String>, value: impl Into<Value>, declared_type: FieldType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            declared_type,
        }
    }
}

/// A snapshot of one database row plus where it came from.
///
/// A record never observes later database changes. The only way to change a
/// value is `set_value`. A record without fields is the empty sentinel, used
/// for optional relations that matched no row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    source_table: String,
    primary_key_field: String,
    fields: Vec<Field>,
}

impl Record {
    /// Create a record with provenance and no fields yet
    pub fn new(source_table: impl Into<String>, primary_key_field: impl Into<String>) -> Self {
        Self {
            source_table: source_table.into(),
            primary_key_field: primary_key_field.into(),
            fields: Vec::new(),
        }
    }

    /// The "no matching row" sentinel
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if this is the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Table this row was read from
    pub fn source_table(&self) -> &str {
        &self.source_table
    }

    /// Name of the primary-key column
    pub fn primary_key_field(&self) -> &str {
        &self.primary_key_field
    }

    /// Append a field, keeping names non-empty and unique
    pub fn push_field(&mut self, field: Field) -> Result<()> {
        if field.name.is_empty() {
            return Err(Error::InvalidField(field.name));
        }
        if self.field(&field.name).is_some() {
            return Err(Error::DuplicateField {
                table: self.source_table.clone(),
                field: field.name,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Builder form of `push_field`
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        declared_type: FieldType,
    ) -> Result<Self> {
        self.push_field(Field::new(name, value, declared_type))?;
        Ok(self)
    }

    /// All fields in column order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field by column position
    pub fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Get a value by column name
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.field(name).map(|f| &f.value)
    }

    /// Value of the primary-key column
    pub fn primary_key(&self) -> Option<&Value> {
        self.value(&self.primary_key_field)
    }

    /// Overwrite a value by column name
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| Error::FieldNotFound(name.to_string()))?;
        field.value = value.into();
        Ok(())
    }

    /// Overwrite a value by column position
    pub fn set_value_at(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or_else(|| Error::FieldNotFound(format!("#{}", index)))?;
        field.value = value.into();
        Ok(())
    }

    /// Whether both records denote the same logical row
    pub fn same_row(&self, other: &Record) -> bool {
        if self.is_empty() || other.is_empty() || self.source_table != other.source_table {
            return false;
        }
        match (self.primary_key(), other.primary_key()) {
            (Some(a), Some(b)) => !a.is_null() && a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mob() -> Record {
        Record::new("creature_template", "entry")
            .with_field("entry", 1000, FieldType::Integer)
            .unwrap()
            .with_field("name", "Test Mob", FieldType::Text)
            .unwrap()
    }

    #[test]
    fn test_record_access() {
        let rec = mob();
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.primary_key(), Some(&Value::Int(1000)));
        assert_eq!(rec.value("name").and_then(|v| v.as_str()), Some("Test Mob"));
        assert_eq!(rec.field_at(1).map(|f| f.name.as_str()), Some("name"));
        assert!(rec.value("missing").is_none());
    }

    #[test]
    fn test_field_names_unique_and_non_empty() {
        let mut rec = mob();
        assert!(matches!(
            rec.push_field(Field::new("entry", 1, FieldType::Integer)),
            Err(Error::DuplicateField { .. })
        ));
        assert_eq!(
            rec.push_field(Field::new("", 1, FieldType::Integer)),
            Err(Error::InvalidField(String::new()))
        );
    }

    #[test]
    fn test_set_value() {
        let mut rec = mob();
        rec.set_value("name", "Renamed").unwrap();
        assert_eq!(rec.value("name"), Some(&Value::Text("Renamed".into())));
        rec.set_value_at(0, 1001).unwrap();
        assert_eq!(rec.primary_key(), Some(&Value::Int(1001)));
        assert!(rec.set_value("nope", 1).is_err());
    }

    #[test]
    fn test_same_row() {
        let a = mob();
        let mut b = mob();
        b.set_value("name", "Other").unwrap();
        assert!(a.same_row(&b));

        let other_table = Record::new("creature", "entry")
            .with_field("entry", 1000, FieldType::Integer)
            .unwrap();
        assert!(!a.same_row(&other_table));
        assert!(!Record::empty().same_row(&Record::empty()));
    }

    #[test]
    fn test_empty_sentinel() {
        let rec = Record::empty();
        assert!(rec.is_empty());
        assert!(rec.primary_key().is_none());
        assert!(!mob().is_empty());
    }
}
