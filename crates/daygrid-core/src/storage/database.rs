//! SQLite-backed blob storage for the event store.
//!
//! The whole store travels as a single JSON document under a fixed
//! key in a kv table; the database never interprets event structure.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::StorageError;
use crate::store::DayStore;

use super::data_dir;

/// Fixed kv key holding the serialized store.
const STORE_KEY: &str = "events";

/// SQLite database holding the persisted event store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/daygrid/daygrid.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("daygrid.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Load the persisted store.
    ///
    /// An absent, malformed, or non-object blob yields an empty store;
    /// bad saved data is never fatal.
    pub fn load_store(&self) -> Result<DayStore, StorageError> {
        match self.kv_get(STORE_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob).unwrap_or_default()),
            None => Ok(DayStore::new()),
        }
    }

    /// Persist the store.
    ///
    /// Skips the write while the store is empty (nothing to save yet).
    pub fn save_store(&self, store: &DayStore) -> Result<(), StorageError> {
        if store.is_empty() {
            return Ok(());
        }
        let blob = serde_json::to_string(store)?;
        self.kv_set(STORE_KEY, &blob)
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
