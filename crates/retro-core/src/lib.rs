//! # Retro Core
//!
//! Core library for Retro - a single-user retrospective journal.
//!
//! This crate provides the persistence model and data shaping logic
//! independent of the HTTP interface.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait and the SQLite implementation
//! - **service**: Shaping between storage rows and the wire-level entry model
//! - **fs**: Data-directory bootstrap helpers

pub mod error;
pub mod fs;
pub mod service;
pub mod storage;

pub use error::{Result, RetroError};
pub use service::EntryService;
pub use storage::StorageEngine;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
