//! Google Ads client stub.
//!
//! Returns canned campaign metrics until the Ads API integration lands.

use crate::models::CampaignPerformance;

/// Customer account queried by the marketing report.
pub const DEFAULT_CUSTOMER_ID: &str = "cust_001";

#[derive(Debug, Clone)]
pub struct GoogleAdsClient {
    customer_id: String,
}

impl GoogleAdsClient {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Performance of the account's campaign. Fixed sample data: $25.00 spend.
    pub fn campaign_performance(&self) -> CampaignPerformance {
        CampaignPerformance {
            campaign_id: "123456789".to_string(),
            clicks: 150,
            impressions: 5000,
            cost_micros: 25_000_000,
        }
    }
}

impl Default for GoogleAdsClient {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMER_ID)
    }
}
