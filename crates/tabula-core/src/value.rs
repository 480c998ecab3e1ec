//! Dynamic value types for database content

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamic scalar as stored in a content table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// SQL NULL
    #[default]
    Null,
    /// Integer value (ids, flags, masks, levels)
    Int(i64),
    /// Floating point value (speeds, scales, multipliers)
    Float(f64),
    /// Text value (names, script names, comments)
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get this value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as raw bytes
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// The type tag matching this value's runtime representation
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Null => FieldType::Null,
            Value::Int(_) => FieldType::Integer,
            Value::Float(_) => FieldType::Real,
            Value::Text(_) => FieldType::Text,
            Value::Blob(_) => FieldType::Blob,
        }
    }

    /// Textual form used for display and filtering.
    ///
    /// `Null` renders as the empty string and blobs as lowercase hex.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Text(s) => f.write_str(s),
            Value::Blob(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Real,
    Text,
    Blob,
    /// Untyped column (no declaration and a NULL value)
    Null,
}

impl FieldType {
    /// The zero/empty value used when synthesizing a new row
    pub fn default_value(self) -> Value {
        match self {
            FieldType::Integer => Value::Int(0),
            FieldType::Real => Value::Float(0.0),
            FieldType::Text => Value::Text(String::new()),
            FieldType::Blob => Value::Blob(Vec::new()),
            FieldType::Null => Value::Null,
        }
    }

    /// Map a column type declaration to a type tag.
    ///
    /// Follows SQLite's affinity rules, which also cover the MySQL-style
    /// declarations found in world database dumps (`mediumint(8) unsigned`,
    /// `varchar(100)`, `float`).
    pub fn from_declaration(decl: &str) -> Self {
        let decl = decl.to_ascii_uppercase();
        if decl.contains("INT") {
            FieldType::Integer
        } else if decl.contains("CHAR") || decl.contains("CLOB") || decl.contains("TEXT") {
            FieldType::Text
        } else if decl.is_empty() || decl.contains("BLOB") {
            FieldType::Blob
        } else {
            FieldType::Real
        }
    }

    /// Check whether a value is acceptable for a column of this type
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (FieldType::Null, _) => true,
            (FieldType::Real, Value::Int(_)) => true,
            (ty, v) => v.field_type() == ty,
        }
    }

    /// Get the type name
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Text => "text",
            FieldType::Blob => "blob",
            FieldType::Null => "null",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Convenient From implementations
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Blob(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
