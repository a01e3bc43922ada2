//! Google Ads campaign data.

use axum::http::StatusCode;

/// `GET /api/marketing/google/campaigns`: not wired to the Ads API yet.
pub async fn google_campaigns() -> (StatusCode, &'static str) {
    (StatusCode::NOT_IMPLEMENTED, "not implemented")
}
