//! Plain SQLite storage backend.
//!
//! This module provides the file-backed SQLite storage engine. The
//! connection is opened once and held behind a mutex for the process
//! lifetime; callers share the engine via `Arc`. Referential integrity
//! (cascade delete, category domain, non-empty text) is declared in the
//! schema so the application code never has to enforce it.

mod row;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, SubsecRound, Utc};
use rusqlite::Connection;

use crate::error::{Result, RetroError};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, NewEntry};

use row::{EntryRow, ItemRow};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        date       TEXT NOT NULL CHECK (date <> ''),
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS entry_items (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        entry_id INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
        type     TEXT NOT NULL CHECK (type IN ('plus', 'minus', 'next')),
        content  TEXT NOT NULL CHECK (content <> '')
    );
"#;

/// File-backed SQLite storage engine.
pub struct SqliteStorage {
    #[allow(dead_code)]
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open the entry store at `path`, creating the database file and
    /// schema on first use.
    ///
    /// The containing directory must already exist (see
    /// `crate::fs::ensure_parent_dir`).
    ///
    /// # Errors
    ///
    /// Returns `RetroError::Storage` if the file cannot be opened or the
    /// schema cannot be applied.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::initialize(&conn)?;
        tracing::debug!(path = %path.display(), "opened entry store");

        Ok(Self {
            path: path.to_path_buf(),
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory entry store. Intended for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn: Mutex::new(conn),
        })
    }

    fn initialize(conn: &Connection) -> Result<()> {
        // Foreign keys are off by default in SQLite; the cascade depends on them.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| RetroError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl StorageEngine for SqliteStorage {
    fn list_entries(&self) -> Result<Vec<Entry>> {
        let conn = self.lock_conn()?;

        // Timestamps are stored at fixed sub-second precision, so ties are
        // rare; the id tie-break keeps newest-insert-first deterministic.
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, created_at
            FROM entries
            ORDER BY created_at DESC, id DESC
            "#,
        )?;
        let entry_rows = stmt
            .query_map([], |row| {
                Ok(EntryRow {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // One pass over the items table; per-category order is item
        // insertion order (rowid).
        let mut stmt = conn.prepare(
            r#"
            SELECT entry_id, type, content
            FROM entry_items
            ORDER BY id
            "#,
        )?;
        let item_rows = stmt.query_map([], |row| {
            Ok(ItemRow {
                entry_id: row.get(0)?,
                category: row.get(1)?,
                content: row.get(2)?,
            })
        })?;

        let mut items_by_entry: HashMap<i64, Vec<ItemRow>> = HashMap::new();
        for item in item_rows {
            let item = item?;
            items_by_entry.entry(item.entry_id).or_default().push(item);
        }

        let mut entries = Vec::with_capacity(entry_rows.len());
        for entry_row in entry_rows {
            let items = items_by_entry.remove(&entry_row.id).unwrap_or_default();
            entries.push(entry_row.into_entry(items)?);
        }

        Ok(entries)
    }

    fn create_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let mut conn = self.lock_conn()?;

        // Truncated to what the column stores, so the returned entry
        // equals what a later list reads back. Fixed-width timestamps
        // keep the lexicographic SQL ordering chronological.
        let created_at = Utc::now().trunc_subsecs(6);
        let created_at_str = created_at.to_rfc3339_opts(SecondsFormat::Micros, true);

        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO entries (date, created_at) VALUES (?, ?)",
            (&entry.date, &created_at_str),
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut insert_item = tx.prepare(
                "INSERT INTO entry_items (entry_id, type, content) VALUES (?, ?, ?)",
            )?;
            for (category, content) in entry.items() {
                insert_item.execute((id, category.as_str(), content))?;
            }
        }

        tx.commit()?;

        Ok(Entry {
            id,
            date: entry.date.clone(),
            created_at,
            plus: entry.plus.clone(),
            minus: entry.minus.clone(),
            next: entry.next.clone(),
        })
    }

    fn delete_entry(&self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;

        // Item rows go with the entry via the schema's cascade. A missing
        // id matches zero rows, which is a successful no-op.
        let deleted = conn.execute("DELETE FROM entries WHERE id = ?", [id])?;
        if deleted == 0 {
            tracing::debug!(id, "delete of unknown entry id, nothing removed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_applies_schema() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_create_returns_populated_entry() {
        let storage = SqliteStorage::open_in_memory().unwrap();

        let entry = storage
            .create_entry(
                &NewEntry::new("2026-08-26")
                    .with_plus(vec!["a".to_string()])
                    .with_next(vec!["b".to_string()]),
            )
            .unwrap();

        assert!(entry.id > 0);
        assert_eq!(entry.date, "2026-08-26");
        assert_eq!(entry.plus, vec!["a"]);
        assert!(entry.minus.is_empty());
        assert_eq!(entry.next, vec!["b"]);
    }

    #[test]
    fn test_empty_date_is_rejected() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.create_entry(&NewEntry::new("")).is_err());
    }
}
