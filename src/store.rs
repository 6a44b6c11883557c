//! Persisted key-value store for streak state
//!
//! The tracker logic only needs a string-keyed get/set surface
//! (`StreakStore`); the dashboard supplies whichever backing it likes.
//! Two implementations ship with the crate:
//!
//! - [`SqliteStore`]: a single-table SQLite database at
//!   `~/.qotd/streaks.db` (or a custom path), used by the CLI host.
//! - [`MemoryStore`]: a `HashMap`-backed store for embedding hosts and tests.
//!
//! Writes are independent per key; there is no multi-key transaction. A
//! crash between writes can leave the record inconsistent, which the tracker
//! tolerates at the next load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

/// Errors from a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create store dir: {0}")]
    CreateDir(#[from] std::io::Error),

    #[error("Store database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Minimal persisted key-value surface the tracker reads and writes.
///
/// Each key is written independently; implementations are not required to
/// provide any cross-key atomicity.
pub trait StreakStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the store at the default location (~/.qotd/streaks.db)
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(&default_store_path()?)
    }

    /// Open or create the store at a specific path
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // WAL so a dashboard process and the CLI can share the store
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS streak_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Delete all persisted state (streak counters reset to defaults)
    pub fn clear(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute("DELETE FROM streak_store", [])?;
        Ok(())
    }
}

impl StreakStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let value = conn
            .query_row(
                "SELECT value FROM streak_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            r#"
            INSERT INTO streak_store (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = ?2
            "#,
            (key, value),
        )?;
        Ok(())
    }
}

/// In-memory store for embedding hosts and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreakStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().expect("store lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("store lock poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Default store path: `~/.qotd/streaks.db`
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(".qotd").join("streaks.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sqlite_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("streaks.db")).unwrap();

        assert_eq!(store.get("qotd-current-streak").unwrap(), None);

        store.set("qotd-current-streak", "3").unwrap();
        assert_eq!(
            store.get("qotd-current-streak").unwrap(),
            Some("3".to_string())
        );

        // Overwrite
        store.set("qotd-current-streak", "4").unwrap();
        assert_eq!(
            store.get("qotd-current-streak").unwrap(),
            Some("4".to_string())
        );
    }

    #[test]
    fn test_sqlite_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("streaks.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("qotd-longest-streak", "12").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("qotd-longest-streak").unwrap(),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_sqlite_clear() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("streaks.db")).unwrap();

        store.set("qotd-current-streak", "7").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get("qotd-current-streak").unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
