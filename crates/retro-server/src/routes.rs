//! HTTP request handlers.
//!
//! Maps the JSON contract consumed by the UI onto entry service calls:
//!
//! - `GET /entries`: all entries, newest first
//! - `POST /entries`: create an entry, returns it with its assigned id
//! - `DELETE /entries/{id}`: idempotent delete

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{delete, get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use retro_core::service::{EntryPayload, NewEntryPayload};

use crate::error::ApiError;
use crate::state::AppState;

/// Wire shape of a successful delete.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteResponse {
    pub success: bool,
}

pub(crate) fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/{id}", delete(delete_entry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// List all entries, newest first.
pub(crate) async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntryPayload>>, ApiError> {
    let entries = state.service.list().map_err(|e| {
        tracing::error!(error = %e, "failed to fetch entries");
        ApiError::new("Failed to fetch entries")
    })?;

    Ok(Json(entries))
}

/// Create a new entry from the submitted payload.
pub(crate) async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryPayload>,
) -> Result<Json<EntryPayload>, ApiError> {
    let entry = state.service.create(payload).map_err(|e| {
        tracing::error!(error = %e, "failed to create entry");
        ApiError::new("Failed to create entry")
    })?;

    Ok(Json(entry))
}

/// Delete an entry. Succeeds whether or not the id existed.
pub(crate) async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.service.delete(&id).map_err(|e| {
        tracing::error!(error = %e, %id, "failed to delete entry");
        ApiError::new("Failed to delete entry")
    })?;

    Ok(Json(DeleteResponse { success: true }))
}
