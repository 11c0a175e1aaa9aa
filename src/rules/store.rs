use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::rules::{
    bundle_table, discount_table, BundleReward, BundleRule, DiscountRule, RuleStore,
    RuleStoreError,
};

/// Postgres-backed rule store
///
/// Reads the `discount_rules` and `bundle_rules` tables on every lookup.
/// There is deliberately no cache: rules are edited in the admin UI and each
/// amendment must act on the current configuration.
#[derive(Clone)]
pub struct PgRuleStore {
    pool: PgPool,
}

impl PgRuleStore {
    /// Create a new PgRuleStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_discount_rules(&self) -> Result<Vec<DiscountRule>, RuleStoreError> {
        let rules = sqlx::query_as::<_, DiscountRule>(
            r#"
            SELECT product_id, discount_amount
            FROM discount_rules
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rules)
    }

    async fn load_bundle_rules(&self) -> Result<Vec<BundleRule>, RuleStoreError> {
        let rules = sqlx::query_as::<_, BundleRule>(
            r#"
            SELECT product_id, free_product_id, free_quantity
            FROM bundle_rules
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rules)
    }
}

#[async_trait]
impl RuleStore for PgRuleStore {
    async fn discount_for(&self, product_id: i64) -> Result<Option<Decimal>, RuleStoreError> {
        let rules = self.load_discount_rules().await?;
        let table = discount_table(&rules);

        let discount = table.get(&product_id).copied();
        if let Some(amount) = discount {
            tracing::debug!("Discount of {} configured for product {}", amount, product_id);
        }

        Ok(discount)
    }

    async fn bundle_for(&self, product_id: i64) -> Result<Option<BundleReward>, RuleStoreError> {
        let rules = self.load_bundle_rules().await?;
        let table = bundle_table(&rules);

        let reward = table.get(&product_id).copied();
        if let Some(reward) = reward {
            tracing::debug!(
                "Bundle for product {}: {} x product {}",
                product_id,
                reward.free_quantity,
                reward.free_product_id
            );
        }

        Ok(reward)
    }
}
