//! Sales tax quote for the storefront checkout.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::{error, warn};

use crate::models::{TaxRequest, TaxResponse};
use crate::tax::TaxError;
use crate::AppState;

/// `POST /api/calculate-tax`: quote tax for a cart.
///
/// The body is decoded regardless of `Content-Type`. Tax failures never reach
/// the caller: an unconfigured or failing Stripe client yields
/// `{"tax_amount": 0}` and the cause is only logged.
///
/// # Errors
///
/// - `400 Bad Request` with the decode error as plain text: malformed JSON or a
///   wrongly typed field. Missing fields decode as zero values.
pub async fn calculate_tax(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TaxResponse>, (StatusCode, String)> {
    let req: TaxRequest =
        serde_json::from_slice(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let tax_amount = match state.tax.calculate(req.cart_total, &req.customer_state).await {
        Ok(amount) => amount,
        Err(TaxError::NotConfigured) => {
            warn!("Stripe key missing, skipping tax calculation");
            0
        }
        Err(e) => {
            error!(
                customer_state = %req.customer_state,
                "Stripe tax calculation failed, charging no tax: {e}"
            );
            0
        }
    };

    Ok(Json(TaxResponse { tax_amount }))
}
