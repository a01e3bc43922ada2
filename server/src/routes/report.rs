//! Marketing performance report.

use axum::{extract::State, Json};

use crate::models::CampaignPerformance;
use crate::AppState;

/// `GET /api/report`: campaign metrics from the ads platform.
pub async fn marketing_report(State(state): State<AppState>) -> Json<CampaignPerformance> {
    Json(state.ads.campaign_performance())
}
