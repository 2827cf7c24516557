//! Purchase History Store
//!
//! Tracks how often each item name has ever been added and when it was
//! last added, keyed by name. Backs the "frequently used" suggestions.
//! Entries are upserted on every add and never deleted in normal operation.

use crate::error::SaudaResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One per-name history record
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    /// Monotonically increasing add counter
    pub add_count: u32,
    /// Milliseconds since the epoch
    pub last_added_at: i64,
}

/// SQLite-backed history store
pub struct HistoryStore {
    db_path: PathBuf,
}

impl HistoryStore {
    pub fn new(db_path: &Path) -> SaudaResult<Self> {
        let store = Self {
            db_path: db_path.to_path_buf(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> SaudaResult<()> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS history (
                name TEXT PRIMARY KEY,
                add_count INTEGER NOT NULL,
                last_added_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Record an add-event for a name, now
    pub fn record_add(&self, name: &str) -> SaudaResult<()> {
        self.record_add_at(name, chrono::Utc::now().timestamp_millis())
    }

    /// Record an add-event with an explicit timestamp (imports, tests)
    pub fn record_add_at(&self, name: &str, timestamp_ms: i64) -> SaudaResult<()> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO history (name, add_count, last_added_at) VALUES (?1, 1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                 add_count = add_count + 1,
                 last_added_at = ?2",
            (name, timestamp_ms),
        )?;
        debug!("history upsert: {}", name);
        Ok(())
    }

    /// Fetch one entry by name
    pub fn entry(&self, name: &str) -> SaudaResult<Option<HistoryEntry>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt =
            conn.prepare("SELECT name, add_count, last_added_at FROM history WHERE name = ?1")?;
        let mut rows = stmt.query_map([name], |row| {
            Ok(HistoryEntry {
                name: row.get(0)?,
                add_count: row.get(1)?,
                last_added_at: row.get(2)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// All history entries, most-added first
    pub fn all(&self) -> SaudaResult<Vec<HistoryEntry>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT name, add_count, last_added_at FROM history ORDER BY add_count DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(HistoryEntry {
                name: row.get(0)?,
                add_count: row.get(1)?,
                last_added_at: row.get(2)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
