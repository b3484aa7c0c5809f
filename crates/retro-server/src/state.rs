//! Shared application state.

use std::sync::Arc;

use retro_core::storage::SqliteStorage;
use retro_core::EntryService;

/// Cloneable handle to the entry service, shared across request handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    pub service: Arc<EntryService<SqliteStorage>>,
}

impl AppState {
    pub fn new(service: EntryService<SqliteStorage>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
