use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::gateway::{GatewayError, OrderGateway};
use crate::models::{LineItem, Order, OrderStatus, PaymentMethod, Product};

/// Order row as stored, without its line items
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    payment_method: PaymentMethod,
    status: OrderStatus,
    total: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Postgres-backed order gateway
///
/// Writes lock the order row (`SELECT ... FOR UPDATE`) so concurrent
/// amendments of the same order serialize instead of losing updates.
#[derive(Clone)]
pub struct PgOrderGateway {
    pool: PgPool,
}

impl PgOrderGateway {
    /// Create a new PgOrderGateway
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderGateway for PgOrderGateway {
    async fn fetch_order(&self, order_id: i64) -> Result<Option<Order>, GatewayError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, payment_method, status, total, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, LineItem>(
            r#"
            SELECT product_id, quantity, unit_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Order {
            id: row.id,
            payment_method: row.payment_method,
            status: row.status,
            total: row.total,
            items,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }

    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, GatewayError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn append_line_item(
        &self,
        order_id: i64,
        product_id: i64,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<(), GatewayError> {
        let mut tx = self.pool.begin().await?;

        // Lock the order row for the duration of the write
        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM orders WHERE id = $1 FOR UPDATE")
                .bind(order_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            return Err(GatewayError::Persistence(format!(
                "order {} vanished before line item could be appended",
                order_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .bind(unit_price)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Appended line item to order {}: product {} x{} at {}",
            order_id,
            product_id,
            quantity,
            unit_price
        );
        Ok(())
    }

    async fn recompute_totals(&self, order_id: i64) -> Result<(), GatewayError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET total = COALESCE(
                    (SELECT SUM(quantity * unit_price) FROM order_items WHERE order_id = $1),
                    0
                ),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::Persistence(format!(
                "order {} vanished before totals could be recomputed",
                order_id
            )));
        }

        Ok(())
    }

    async fn set_status(&self, order_id: i64, status: OrderStatus) -> Result<(), GatewayError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(status)
        .bind(order_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::Persistence(format!(
                "order {} vanished before status could be set to {}",
                order_id, status
            )));
        }

        tracing::debug!("Order {} status set to {}", order_id, status);
        Ok(())
    }
}
