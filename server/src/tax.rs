//! Stripe Tax client.
//!
//! [`StripeTaxClient`] wraps `reqwest::Client` and quotes sales tax for a cart
//! through `POST /v1/tax/calculations`. The credential comes from
//! [`TaxConfig`] at construction; without one the client reports
//! [`TaxError::NotConfigured`] and never touches the network.
//!
//! Stripe requires a full customer address, but checkout only collects the
//! state so far. The remaining address fields are fixed placeholders that
//! satisfy Stripe's validation.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::TaxConfig;

const CURRENCY: &str = "usd";
const LINE_ITEM_REFERENCE: &str = "Generic-Wagon";
const PLACEHOLDER_LINE1: &str = "123 Main St";
const PLACEHOLDER_CITY: &str = "San Francisco";
const PLACEHOLDER_POSTAL_CODE: &str = "94111";
const COUNTRY: &str = "US";
const ADDRESS_SOURCE: &str = "shipping";

/// Why a tax quote could not be produced.
#[derive(Debug, Error)]
pub enum TaxError {
    /// No Stripe key configured (development mode).
    #[error("Stripe API key not configured")]
    NotConfigured,
    /// Transport failure, including timeouts.
    #[error("Stripe request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// Stripe answered with a non-2xx status.
    #[error("Stripe error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("unexpected Stripe response: {0}")]
    Protocol(String),
}

#[derive(Deserialize)]
struct TaxCalculation {
    tax_amount_exclusive: i64,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// HTTP client for the Stripe Tax calculations API.
#[derive(Clone)]
pub struct StripeTaxClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl StripeTaxClient {
    pub fn new(config: &TaxConfig) -> Result<Self, TaxError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TaxError::Request)?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.stripe_api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Tax owed, in cents, on a cart of `cart_total` cents shipped to
    /// `customer_state`. The whole cart is sent as a single line item.
    pub async fn calculate(&self, cart_total: i64, customer_state: &str) -> Result<i64, TaxError> {
        let api_key = self.api_key.as_deref().ok_or(TaxError::NotConfigured)?;

        let amount = cart_total.to_string();
        let form = [
            ("currency", CURRENCY),
            ("line_items[0][amount]", amount.as_str()),
            ("line_items[0][reference]", LINE_ITEM_REFERENCE),
            ("customer_details[address][line1]", PLACEHOLDER_LINE1),
            ("customer_details[address][city]", PLACEHOLDER_CITY),
            ("customer_details[address][postal_code]", PLACEHOLDER_POSTAL_CODE),
            ("customer_details[address][state]", customer_state),
            ("customer_details[address][country]", COUNTRY),
            ("customer_details[address_source]", ADDRESS_SOURCE),
        ];

        let resp = self
            .http
            .post(format!("{}/v1/tax/calculations", self.api_base))
            .bearer_auth(api_key)
            .form(&form)
            .send()
            .await
            .map_err(TaxError::Request)?;

        let status = resp.status();
        let body = resp.text().await.map_err(TaxError::Request)?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or(body);
            return Err(TaxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let calculation: TaxCalculation =
            serde_json::from_str(&body).map_err(|e| TaxError::Protocol(e.to_string()))?;
        Ok(calculation.tax_amount_exclusive)
    }
}
