//! Storage abstraction for Retro.
//!
//! This module defines the `StorageEngine` trait and core types for
//! the retrospective entry store.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic: the service layer only sees
//! the `StorageEngine` trait. The shipped backend is plain SQLite on
//! local disk (`SqliteStorage`), with the cascade-delete and
//! atomic-insert guarantees expressed declaratively in the schema
//! rather than enforced in application code.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Category, Entry, NewEntry};
