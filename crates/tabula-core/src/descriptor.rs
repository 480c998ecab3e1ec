//! Compile-time table metadata

use crate::value::FieldType;

/// A known column of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl ColumnDef {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Integer,
        }
    }

    pub const fn real(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Real,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Text,
        }
    }
}

/// Name registry for one logical table. Holds no row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name
    pub name: &'static str,
    /// Primary-key column
    pub primary_key: &'static str,
    /// Known columns in table order
    pub columns: &'static [ColumnDef],
}

impl TableDescriptor {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check whether the table declares a column
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Declared type of a column, if known
    pub fn column_type(&self, name: &str) -> Option<FieldType> {
        self.column(name).map(|c| c.field_type)
    }

    /// Column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}
