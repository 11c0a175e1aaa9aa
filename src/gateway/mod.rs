// Order Gateway
//
// The narrow contract the amendment engine needs from the order and product
// store: fetch an order, fetch a product, append a line item, recompute
// totals, set a status. Everything else about order persistence belongs to
// the shop platform behind this seam.

pub mod postgres;

pub use postgres::PgOrderGateway;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Order, OrderStatus, Product};

/// Error type for gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Contract between the amendment engine and the order/product store
///
/// Implementations must serialize updates per order: two concurrent
/// amendments of the same order may not lose writes. The Postgres
/// implementation takes a row lock; test doubles use a single mutex.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Fetch an order with its line items, or `None` if unknown
    async fn fetch_order(&self, order_id: i64) -> Result<Option<Order>, GatewayError>;

    /// Fetch a catalog product, or `None` if unknown
    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, GatewayError>;

    /// Append one line item to an order
    async fn append_line_item(
        &self,
        order_id: i64,
        product_id: i64,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<(), GatewayError>;

    /// Recompute the order total from its line items
    ///
    /// Must be requested after every line-item change; callers never compute
    /// the total themselves.
    async fn recompute_totals(&self, order_id: i64) -> Result<(), GatewayError>;

    /// Set the order status
    async fn set_status(&self, order_id: i64, status: OrderStatus) -> Result<(), GatewayError>;
}
