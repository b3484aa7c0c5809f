//! Storage engine trait definition.
//!
//! The `StorageEngine` trait defines the interface that storage backends
//! must implement. This abstraction keeps the entry service testable
//! against any backend without changing the core logic.

use super::types::{Entry, NewEntry};
use crate::error::Result;

/// Storage engine interface for the retrospective entry store.
///
/// All implementations must ensure:
/// - Create and delete each execute as a single atomic step
/// - Deleting an entry cascades to all of its item rows
/// - Entries are immutable after creation
pub trait StorageEngine: Send + Sync {
    /// List all entries, newest first.
    ///
    /// Each entry comes back with its three category lists populated;
    /// per-category item order is insertion order. There is no
    /// pagination; every call returns the full set.
    fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Insert a new entry together with all of its items.
    ///
    /// Storage assigns the id and the creation timestamp. Either every
    /// row is written or none are.
    ///
    /// # Returns
    ///
    /// Returns the fully populated entry, including the assigned id.
    fn create_entry(&self, entry: &NewEntry) -> Result<Entry>;

    /// Delete an entry and all of its items atomically.
    ///
    /// Deleting an id that does not exist is a successful no-op; callers
    /// are not required to check existence first.
    fn delete_entry(&self, id: i64) -> Result<()>;
}
