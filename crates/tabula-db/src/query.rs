//! Single-table lookups by key.

use crate::error::{Error, Result};
use crate::session::Session;
use crate::tables;
use rusqlite::types::{Value as SqlValue, ValueRef};
use tabula_core::{Field, FieldType, Record, TableDescriptor, Value};
use tracing::{debug, warn};

/// Result-count expectation of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Exactly one row or a `Cardinality` error
    ExactlyOne,
    /// Any number of rows
    Any,
}

/// Quote an identifier for SQLite, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `SELECT * FROM "<schema>"."<table>" WHERE "<schema>"."<table>"."<column>" = ?1`
///
/// The key column is fully qualified: SQLite reads a lone quoted name that
/// matches no column as a string literal, a qualified one never.
pub fn select_statement(schema: &str, table: &str, column: &str) -> String {
    let table = format!("{}.{}", quote_identifier(schema), quote_identifier(table));
    format!(
        "SELECT * FROM {} WHERE {}.{} = ?1",
        table,
        table,
        quote_identifier(column)
    )
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Int(i) => SqlValue::Integer(*i),
        Value::Float(f) => SqlValue::Real(*f),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Blob(b) => SqlValue::Blob(b.clone()),
    }
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

/// Runs key lookups against the session's world database.
///
/// Every call hits the database; nothing is cached.
pub struct QueryEngine<'s> {
    session: &'s Session,
}

impl<'s> QueryEngine<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &'s Session {
        self.session
    }

    /// Fetch every row of `table` whose `key_column` equals `key`.
    ///
    /// A null key is rejected before any statement is built.
    pub fn query(
        &self,
        table: &TableDescriptor,
        key_column: &str,
        key: &Value,
        expect: Expect,
    ) -> Result<Vec<Record>> {
        if key.is_null() {
            return Err(Error::InvalidInput(format!(
                "null key for {}.{}",
                table.name, key_column
            )));
        }

        let sql = select_statement(self.session.world_db(), table.name, key_column);
        debug!(table = table.name, column = key_column, key = %key, "select");
        self.session.record_query();

        let conn = self.session.connection();
        let mut stmt = conn.prepare(&sql)?;
        let columns: Vec<(String, Option<FieldType>)> = stmt
            .columns()
            .iter()
            .map(|c| {
                (
                    c.name().to_string(),
                    c.decl_type().map(FieldType::from_declaration),
                )
            })
            .collect();

        let mut records = Vec::new();
        let mut rows = stmt.query([to_sql(key)])?;
        while let Some(row) = rows.next()? {
            let mut record = Record::new(table.name, table.primary_key);
            for (i, (name, declared)) in columns.iter().enumerate() {
                let value = from_sql(row.get_ref(i)?);
                let field_type = table
                    .column_type(name)
                    .or(*declared)
                    .unwrap_or_else(|| value.field_type());
                record.push_field(Field::new(name.clone(), value, field_type))?;
            }
            records.push(record);
        }

        if expect == Expect::ExactlyOne && records.len() != 1 {
            warn!(
                table = table.name,
                column = key_column,
                key = %key,
                found = records.len(),
                "strict query cardinality mismatch"
            );
            return Err(Error::Cardinality {
                table: table.name.to_string(),
                expected: 1,
                found: records.len(),
            });
        }
        Ok(records)
    }

    /// Fetch at most one row.
    ///
    /// Strict mode requires exactly one row. Otherwise zero rows yield the
    /// empty sentinel and extra rows are ignored.
    pub fn query_one(
        &self,
        table: &TableDescriptor,
        key_column: &str,
        key: &Value,
        strict: bool,
    ) -> Result<Record> {
        let expect = if strict { Expect::ExactlyOne } else { Expect::Any };
        let records = self.query(table, key_column, key, expect)?;
        Ok(records.into_iter().next().unwrap_or_default())
    }

    /// `query` with the table resolved from the registry.
    pub fn query_table(
        &self,
        table: &str,
        key_column: &str,
        key: &Value,
        expect: Expect,
    ) -> Result<Vec<Record>> {
        self.query(tables::require(table)?, key_column, key, expect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::world;
    use crate::tables::{CREATURE_AI_SCRIPTS, CREATURE_MODEL_INFO, CREATURE_TEMPLATE};
    use tabula_core::ColumnDef;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("entry"), "\"entry\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(
            select_statement("main", "creature", "id"),
            "SELECT * FROM \"main\".\"creature\" WHERE \"main\".\"creature\".\"id\" = ?1"
        );
    }

    #[test]
    fn test_exactly_one() {
        let session = world();
        let engine = QueryEngine::new(&session);

        let rows = engine
            .query(&CREATURE_TEMPLATE, "entry", &Value::Int(1000), Expect::ExactlyOne)
            .unwrap();
        assert_eq!(rows.len(), 1);
        let rec = &rows[0];
        assert_eq!(rec.source_table(), "creature_template");
        assert_eq!(rec.primary_key_field(), "entry");
        assert_eq!(rec.value("name"), Some(&Value::Text("Test Mob".into())));
        assert_eq!(rec.field("speed_walk").map(|f| f.declared_type), Some(FieldType::Real));
        assert_eq!(rec.field_at(0).map(|f| f.name.as_str()), Some("entry"));
    }

    #[test]
    fn test_exactly_one_cardinality() {
        let session = world();
        let engine = QueryEngine::new(&session);

        let none = engine.query(&CREATURE_TEMPLATE, "entry", &Value::Int(42), Expect::ExactlyOne);
        assert!(matches!(none, Err(Error::Cardinality { found: 0, .. })));

        let two = engine.query(
            &CREATURE_AI_SCRIPTS,
            "creature_id",
            &Value::Int(1000),
            Expect::ExactlyOne,
        );
        assert!(matches!(two, Err(Error::Cardinality { found: 2, expected: 1, .. })));
    }

    #[test]
    fn test_null_key_is_invalid_input() {
        let session = world();
        let engine = QueryEngine::new(&session);
        for expect in [Expect::Any, Expect::ExactlyOne] {
            let result = engine.query(&CREATURE_MODEL_INFO, "modelid", &Value::Null, expect);
            assert!(matches!(result, Err(Error::InvalidInput(_))));
        }
        assert!(matches!(
            engine.query_one(&CREATURE_TEMPLATE, "name", &Value::Null, false),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(session.queries_issued(), 0);
    }

    #[test]
    fn test_query_one_sentinel() {
        let session = world();
        let engine = QueryEngine::new(&session);

        let missing = engine
            .query_one(&CREATURE_MODEL_INFO, "modelid", &Value::Int(0), false)
            .unwrap();
        assert!(missing.is_empty());

        let strict = engine.query_one(&CREATURE_MODEL_INFO, "modelid", &Value::Int(0), true);
        assert!(matches!(strict, Err(Error::Cardinality { .. })));

        let found = engine
            .query_one(&CREATURE_MODEL_INFO, "modelid", &Value::Int(500), true)
            .unwrap();
        assert_eq!(found.primary_key(), Some(&Value::Int(500)));
        assert_eq!(session.queries_issued(), 3);
    }

    #[test]
    fn test_values_are_bound_not_spliced() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let hostile = Value::Text("1000 OR 1=1".into());
        let rows = engine
            .query(&CREATURE_TEMPLATE, "entry", &hostile, Expect::Any)
            .unwrap();
        assert!(rows.is_empty());

        let quote = Value::Text("x'; DROP TABLE creature_template; --".into());
        let rows = engine.query(&CREATURE_TEMPLATE, "name", &quote, Expect::Any).unwrap();
        assert!(rows.is_empty());
        assert!(engine
            .query(&CREATURE_TEMPLATE, "entry", &Value::Int(1000), Expect::ExactlyOne)
            .is_ok());
    }

    #[test]
    fn test_hostile_identifiers() {
        const ODD: TableDescriptor = TableDescriptor {
            name: "odd\"table",
            primary_key: "k\"ey",
            columns: &[ColumnDef::int("k\"ey")],
        };
        let session = Session::open_in_memory().unwrap();
        session
            .execute_batch(
                "CREATE TABLE \"odd\"\"table\" (\"k\"\"ey\" INTEGER, note TEXT);
                 INSERT INTO \"odd\"\"table\" VALUES (1, 'a');",
            )
            .unwrap();
        let engine = QueryEngine::new(&session);
        let rows = engine.query(&ODD, "k\"ey", &Value::Int(1), Expect::ExactlyOne).unwrap();
        assert_eq!(rows[0].value("note"), Some(&Value::Text("a".into())));
        assert_eq!(rows[0].field("note").map(|f| f.declared_type), Some(FieldType::Text));
    }

    #[test]
    fn test_execution_error_carries_diagnostic() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let result = engine.query(&CREATURE_TEMPLATE, "no_such_column", &Value::Int(1), Expect::Any);
        match result {
            Err(Error::QueryExecution(msg)) => assert!(msg.contains("no_such_column")),
            other => panic!("expected execution error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_column_is_not_a_cardinality_error() {
        let session = world();
        let engine = QueryEngine::new(&session);
        let result = engine.query_one(&CREATURE_TEMPLATE, "no_such_column", &Value::Int(1000), true);
        assert!(matches!(result, Err(Error::QueryExecution(_))));
        let result = engine.query_one(&CREATURE_MODEL_INFO, "model_id", &Value::Int(500), false);
        assert!(matches!(result, Err(Error::QueryExecution(_))));
    }

    #[test]
    fn test_unknown_table() {
        let session = world();
        let engine = QueryEngine::new(&session);
        assert!(matches!(
            engine.query_table("spell_template", "id", &Value::Int(1), Expect::Any),
            Err(Error::UnknownTable(_))
        ));
        assert_eq!(
            engine
                .query_table("creature", "id", &Value::Int(1001), Expect::Any)
                .unwrap()
                .len(),
            2
        );
    }
}
