//! HTTP route handlers. All of them sit behind the internal token gate.

pub mod campaigns;

use axum::{routing::get, Router};
use dropship_api::routes::health;

/// Ungated routes; [`crate::router`] adds the token check.
pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/marketing/google/campaigns",
            get(campaigns::google_campaigns),
        )
}
