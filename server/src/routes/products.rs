//! Product listing for the admin UI.

use axum::Json;

use crate::models::Product;

/// `GET /api/products`: inventory snapshot.
///
/// Serves sample rows until the inventory table schema is settled.
pub async fn list_products() -> Json<Vec<Product>> {
    Json(sample_products())
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            sku: "SKU-123".to_string(),
            qty: 100,
            cost: 25.50,
        },
        Product {
            sku: "SKU-456".to_string(),
            qty: 5,
            cost: 120.00,
        },
    ]
}
