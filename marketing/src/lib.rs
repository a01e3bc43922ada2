#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! marketing-service library: the router, so tests can drive it without a
//! socket.

pub mod routes;

use axum::Router;
use dropship_api::auth;
use tower_http::trace::TraceLayer;

/// Every route, gated on `x-internal-token == secret`.
pub fn router(secret: impl Into<String>) -> Router {
    auth::gate(routes::router(), secret).layer(TraceLayer::new_for_http())
}
