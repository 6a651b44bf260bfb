//! SQLite-backed key-value storage
//!
//! One row per key. The schema version lives in `PRAGMA user_version`; a
//! file written by a different version is deleted and rebuilt.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::KeyValueStorage;
use crate::error::StorageError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the data directory
const DB_FILE: &str = "storage.db";

type Result<T> = std::result::Result<T, StorageError>;

/// Persistent key-value storage in a local SQLite database
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Get the default data directory (~/.local/share/tokenauth on Linux)
    pub fn data_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(base.join("tokenauth"))
    }

    /// Open or create storage at a specific directory
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| StorageError::Io(format!("Failed to create data dir: {}", e)))?;

        let db_path = dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| StorageError::Io(format!("Failed to remove storage DB: {}", e)))?;
            return Self::open_at(dir);
        }

        Self::init(conn)
    }

    /// Open a throwaway in-memory database
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Io("storage connection lock poisoned".to_string()))
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()?
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().timestamp();
        self.conn()?.execute(
            "INSERT OR REPLACE INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.conn()?
            .execute("DELETE FROM kv_entries WHERE key = ?1", [key])?;
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let ts: Option<i64> = self
            .conn()?
            .query_row(
                "SELECT updated_at FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts.and_then(|t| DateTime::from_timestamp(t, 0)))
    }

    fn describe(&self) -> &'static str {
        "sqlite"
    }
}
