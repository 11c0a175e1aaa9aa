// Amendment rule tables
//
// Read-only lookup of the two admin-authored rule tables: per-product flat
// discounts, and "buy X get Y free" bundle rewards keyed by trigger product.
// Authoring happens in the shop admin UI; this service only consumes the
// resulting rows. Lookups are snapshot reads, no caching: every amendment
// sees the rules as currently configured.

pub mod store;

pub use store::PgRuleStore;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::collections::HashMap;
use thiserror::Error;

/// A configured flat-amount price reduction for a specific product
#[derive(Debug, Clone, FromRow)]
pub struct DiscountRule {
    pub product_id: i64,
    pub discount_amount: Decimal,
}

/// A configured free-item reward granted when a trigger product is added
#[derive(Debug, Clone, FromRow)]
pub struct BundleRule {
    pub product_id: i64,
    pub free_product_id: i64,
    pub free_quantity: i32,
}

/// The reward half of a bundle rule, as seen by the amendment engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleReward {
    pub free_product_id: i64,
    pub free_quantity: i32,
}

/// Error type for rule table reads
#[derive(Debug, Error)]
pub enum RuleStoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Read-only lookup contract for amendment rules
///
/// Injected into the amendment engine; implementations decide where the
/// tables live (Postgres in production, in-memory maps in tests).
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Configured discount for a product, or `None` if unconfigured.
    /// The amount is a flat currency value, not a percentage.
    async fn discount_for(&self, product_id: i64) -> Result<Option<Decimal>, RuleStoreError>;

    /// Bundle reward triggered by adding a product, or `None`.
    async fn bundle_for(&self, product_id: i64) -> Result<Option<BundleReward>, RuleStoreError>;
}

/// Fold discount rows into a product-keyed table.
///
/// Rows are applied in registration order, so when two rows name the same
/// product the later one wins.
pub fn discount_table(rules: &[DiscountRule]) -> HashMap<i64, Decimal> {
    let mut table = HashMap::new();
    for rule in rules {
        table.insert(rule.product_id, rule.discount_amount);
    }
    table
}

/// Fold bundle rows into a trigger-product-keyed table, last wins.
pub fn bundle_table(rules: &[BundleRule]) -> HashMap<i64, BundleReward> {
    let mut table = HashMap::new();
    for rule in rules {
        table.insert(
            rule.product_id,
            BundleReward {
                free_product_id: rule.free_product_id,
                free_quantity: rule.free_quantity,
            },
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_table_keys_by_product() {
        let rules = vec![
            DiscountRule {
                product_id: 10,
                discount_amount: dec!(5.00),
            },
            DiscountRule {
                product_id: 20,
                discount_amount: dec!(2.50),
            },
        ];

        let table = discount_table(&rules);
        assert_eq!(table.get(&10), Some(&dec!(5.00)));
        assert_eq!(table.get(&20), Some(&dec!(2.50)));
        assert_eq!(table.get(&30), None);
    }

    #[test]
    fn test_discount_table_last_rule_wins() {
        let rules = vec![
            DiscountRule {
                product_id: 10,
                discount_amount: dec!(5.00),
            },
            DiscountRule {
                product_id: 10,
                discount_amount: dec!(7.00),
            },
        ];

        let table = discount_table(&rules);
        assert_eq!(table.get(&10), Some(&dec!(7.00)));
    }

    #[test]
    fn test_bundle_table_keys_by_trigger() {
        let rules = vec![BundleRule {
            product_id: 10,
            free_product_id: 99,
            free_quantity: 3,
        }];

        let table = bundle_table(&rules);
        assert_eq!(
            table.get(&10),
            Some(&BundleReward {
                free_product_id: 99,
                free_quantity: 3,
            })
        );
        assert_eq!(table.get(&99), None);
    }

    #[test]
    fn test_bundle_table_last_rule_wins() {
        let rules = vec![
            BundleRule {
                product_id: 10,
                free_product_id: 99,
                free_quantity: 3,
            },
            BundleRule {
                product_id: 10,
                free_product_id: 42,
                free_quantity: 1,
            },
        ];

        let table = bundle_table(&rules);
        assert_eq!(
            table.get(&10),
            Some(&BundleReward {
                free_product_id: 42,
                free_quantity: 1,
            })
        );
    }
}
