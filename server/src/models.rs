//! Request/response payloads shared by the route handlers.

use serde::{Deserialize, Deserializer, Serialize};

/// One inventory row as exposed to the admin UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub qty: u32,
    pub cost: f64,
}

/// Request body for `POST /api/calculate-tax`.
///
/// Missing or `null` fields decode to zero values; only malformed JSON or a
/// wrongly typed field is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxRequest {
    /// Cart total in cents.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cart_total: i64,
    /// Two-letter US state code, e.g. `CA`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_state: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response body for `POST /api/calculate-tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResponse {
    /// Tax owed in cents. Zero when tax could not be calculated.
    pub tax_amount: i64,
}

/// Advertising metrics for a single campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub campaign_id: String,
    pub clicks: u64,
    pub impressions: u64,
    /// Spend in millionths of the account currency.
    pub cost_micros: u64,
}
