//! Background sync trigger.

use axum::{extract::State, http::StatusCode};
use tracing::warn;

use crate::sync::SubmitError;
use crate::AppState;

pub const SYNC_STARTED: &str = "Sync job started in background";

/// `POST /api/sync`: queue a sync run and return without waiting for it.
///
/// # Errors
///
/// - `503 Service Unavailable`: the queue is full or shutting down
pub async fn trigger_sync(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.sync.submit() {
        // The job reports its own outcome; nobody waits on the handle here.
        Ok(_handle) => (StatusCode::OK, SYNC_STARTED),
        Err(SubmitError::QueueFull) => {
            warn!("Sync requested while queue is full");
            (StatusCode::SERVICE_UNAVAILABLE, "Sync queue is full")
        }
        Err(SubmitError::Closed) => (StatusCode::SERVICE_UNAVAILABLE, "Sync is shutting down"),
    }
}
