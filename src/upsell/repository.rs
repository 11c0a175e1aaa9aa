use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Product;
use crate::upsell::error::UpsellError;
use crate::upsell::{UpsellCatalog, UPSELL_LIMIT};

/// Postgres-backed upsell catalog
#[derive(Clone)]
pub struct UpsellRepository {
    pool: PgPool,
}

impl UpsellRepository {
    /// Create a new UpsellRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpsellCatalog for UpsellRepository {
    /// Find catalog products sharing a category with the given products.
    /// The query already drops the products themselves and bounds the row
    /// count; the service applies the same display rules again on whatever
    /// comes back.
    async fn related_products(&self, product_ids: &[i64]) -> Result<Vec<Product>, UpsellError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, created_at
            FROM products
            WHERE category IN (SELECT DISTINCT category FROM products WHERE id = ANY($1))
              AND id != ALL($1)
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(product_ids)
        .bind(UPSELL_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
