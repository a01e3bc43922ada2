//! Unauthenticated health-check endpoint.

/// `GET /api/health`: liveness probe. Always `200 ok`.
pub async fn health() -> &'static str {
    "ok"
}
