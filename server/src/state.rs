//! Shared application state passed to every handler via Axum's `State` extractor.

use std::sync::Arc;

use crate::ads::GoogleAdsClient;
use crate::config::Config;
use crate::sync::SyncQueue;
use crate::tax::StripeTaxClient;

/// Shared application state for the dropship API.
///
/// The database pool is deliberately absent: no handler queries it yet, and
/// `main` owns it so it can be closed exactly once.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<Config>,
    /// Stripe Tax client, built from `config.tax`.
    pub tax: StripeTaxClient,
    /// Submission side of the background sync queue.
    pub sync: SyncQueue,
    /// Ads platform client backing the marketing report.
    pub ads: GoogleAdsClient,
}
