use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::amendment::PriceCalculator;
use crate::models::{Order, OrderStatus, PaymentMethod};

/// Request DTO for adding a product to an existing order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddProductRequest {
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Response DTO for a successful amendment: the final order snapshot
#[derive(Debug, Serialize, ToSchema)]
pub struct AmendmentResponse {
    pub order_id: i64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub items: Vec<LineItemResponse>,
}

/// Response DTO for one line item
#[derive(Debug, Serialize, ToSchema)]
pub struct LineItemResponse {
    pub product_id: i64,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

impl From<Order> for AmendmentResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            payment_method: order.payment_method,
            status: order.status,
            total: order.total,
            items: order
                .items
                .into_iter()
                .map(|item| LineItemResponse {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    subtotal: PriceCalculator::line_subtotal(item.quantity, item.unit_price),
                })
                .collect(),
        }
    }
}
