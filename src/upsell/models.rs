use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Response DTO for the confirmation-page upsell block
#[derive(Debug, Serialize, ToSchema)]
pub struct UpsellResponse {
    pub order_id: i64,
    /// Whether the order can still be amended (Cash-on-Delivery only)
    pub eligible: bool,
    pub products: Vec<UpsellProduct>,
}

/// Response DTO for one suggested product
#[derive(Debug, Serialize, ToSchema)]
pub struct UpsellProduct {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl From<Product> for UpsellProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
        }
    }
}
