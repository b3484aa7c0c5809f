//! Entry service: the boundary between storage rows and the wire-level
//! entry representation.
//!
//! Incoming payloads are stripped of blank items before they reach
//! storage; stored entries are reshaped into the JSON contract the UI
//! consumes, with the integer surrogate key rendered as a string.

pub mod shape;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::types::{Entry, NewEntry};
use crate::storage::StorageEngine;

use shape::strip_blank_items;

/// Wire-level entry representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    /// Storage surrogate key, string-typed at the API boundary
    pub id: String,
    pub date: String,
    pub plus: Vec<String>,
    pub minus: Vec<String>,
    pub next: Vec<String>,
}

impl From<Entry> for EntryPayload {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.date,
            plus: entry.plus,
            minus: entry.minus,
            next: entry.next,
        }
    }
}

/// Wire-level payload for creating an entry. Missing lists deserialize
/// as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEntryPayload {
    pub date: String,
    #[serde(default)]
    pub plus: Vec<String>,
    #[serde(default)]
    pub minus: Vec<String>,
    #[serde(default)]
    pub next: Vec<String>,
}

/// Validates and shapes payloads on their way in and out of storage.
pub struct EntryService<S: StorageEngine> {
    storage: S,
}

impl<S: StorageEngine> EntryService<S> {
    /// Wrap a storage engine. The handle is passed in explicitly so the
    /// service can be built over any backend in tests.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// List all entries, newest first, in wire shape.
    pub fn list(&self) -> Result<Vec<EntryPayload>> {
        let entries = self.storage.list_entries()?;
        Ok(entries.into_iter().map(EntryPayload::from).collect())
    }

    /// Strip blank items per category and persist the entry.
    ///
    /// An entry whose lists are all empty after stripping is still
    /// valid; only the date must be non-empty (enforced by storage).
    pub fn create(&self, payload: NewEntryPayload) -> Result<EntryPayload> {
        let new_entry = NewEntry::new(payload.date)
            .with_plus(strip_blank_items(payload.plus))
            .with_minus(strip_blank_items(payload.minus))
            .with_next(strip_blank_items(payload.next));

        let entry = self.storage.create_entry(&new_entry)?;
        Ok(EntryPayload::from(entry))
    }

    /// Delete the entry with the given wire id.
    ///
    /// Idempotent: an id that does not exist, or does not even parse as
    /// one of ours, deletes nothing and still succeeds.
    pub fn delete(&self, id: &str) -> Result<()> {
        let Ok(id) = id.parse::<i64>() else {
            tracing::debug!(id, "delete with non-numeric entry id, nothing removed");
            return Ok(());
        };
        self.storage.delete_entry(id)
    }
}
