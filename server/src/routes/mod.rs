//! HTTP route handlers.
//!
//! Each sub-module corresponds to one API endpoint. None of them require
//! authentication; the admin UI is served from disk for every other path.

pub mod health;
pub mod products;
pub mod report;
pub mod sync;
pub mod tax;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::static_files::{self, StaticMountError};
use crate::AppState;

/// API routes only, with state applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/products", get(products::list_products))
        .route("/api/sync", post(sync::trigger_sync))
        .route("/api/calculate-tax", post(tax::calculate_tax))
        .route("/api/report", get(report::marketing_report))
        .with_state(state)
}

/// The full application: API routes, the admin UI mounted per
/// `config.server`, and request tracing.
pub fn app(state: AppState) -> Result<Router, StaticMountError> {
    let server = state.config.server.clone();
    let router = static_files::mount(
        api_router(state),
        &server.static_mount,
        &server.static_dir,
    )?;
    Ok(router.layer(TraceLayer::new_for_http()))
}
