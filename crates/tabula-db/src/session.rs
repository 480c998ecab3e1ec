//! Database session wrapper.

use crate::error::Result;
use crate::query::quote_identifier;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::path::PathBuf;
use tracing::info;

/// Connection settings for the world database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Database file; `None` opens an in-memory database
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Schema every table name is qualified with
    #[serde(default = "default_world_db")]
    pub world_db: String,
    /// Extra database files attached at open
    #[serde(default)]
    pub attach: Vec<AttachedDb>,
}

/// A database file attached under its own schema name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedDb {
    pub schema: String,
    pub path: PathBuf,
}

fn default_world_db() -> String {
    "main".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: None,
            world_db: default_world_db(),
            attach: Vec::new(),
        }
    }
}

/// The single connection every query goes through.
///
/// Holds a `Cell`, so a session is `!Sync` and stays on the thread that
/// opened it.
pub struct Session {
    conn: Connection,
    world_db: String,
    queries: Cell<u64>,
}

impl Session {
    /// Open the database described by `config`.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let conn = match &config.path {
            Some(path) => Connection::open(path)?,
            None => Connection::open_in_memory()?,
        };
        for db in &config.attach {
            let sql = format!("ATTACH DATABASE ?1 AS {}", quote_identifier(&db.schema));
            conn.execute(&sql, [db.path.to_string_lossy().into_owned()])?;
        }
        info!(
            path = ?config.path,
            world_db = %config.world_db,
            attached = config.attach.len(),
            "session opened"
        );
        Ok(Self {
            conn,
            world_db: config.world_db.clone(),
            queries: Cell::new(0),
        })
    }

    /// Create an in-memory database using the `main` schema.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(&SessionConfig::default())
    }

    /// Schema name that qualifies table names
    pub fn world_db(&self) -> &str {
        &self.world_db
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run a batch of statements, e.g. to seed fixtures.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Number of SELECT statements issued through this session
    pub fn queries_issued(&self) -> u64 {
        self.queries.get()
    }

    pub(crate) fn record_query(&self) {
        self.queries.set(self.queries.get() + 1);
    }
}
