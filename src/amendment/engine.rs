use rust_decimal::Decimal;
use std::sync::Arc;

use crate::amendment::{AmendError, PriceCalculator};
use crate::gateway::OrderGateway;
use crate::models::{Order, OrderStatus, PaymentMethod};
use crate::rules::RuleStore;

/// Engine for amending already-placed Cash-on-Delivery orders
///
/// Holds the two injected collaborators the decision logic needs: the order
/// gateway and the read-only rule store. All persistence goes through the
/// gateway; the engine never computes or caches order totals itself.
#[derive(Clone)]
pub struct AmendmentEngine {
    gateway: Arc<dyn OrderGateway>,
    rules: Arc<dyn RuleStore>,
}

impl AmendmentEngine {
    /// Create a new AmendmentEngine
    pub fn new(gateway: Arc<dyn OrderGateway>, rules: Arc<dyn RuleStore>) -> Self {
        Self { gateway, rules }
    }

    /// Attempt to append a product to an existing order
    ///
    /// # Arguments
    /// * `order_id` - Order to amend
    /// * `product_id` - Product to add
    /// * `quantity` - How many units to add
    ///
    /// # Returns
    /// The final order snapshot on success, or the first failure hit.
    ///
    /// # Policy
    /// - Only Cash-on-Delivery orders are eligible; this is the single gate
    ///   for the whole amendment path.
    /// - A configured flat discount is subtracted from the catalog price,
    ///   clamped at zero.
    /// - A configured bundle rule appends its free item after the primary
    ///   item, at unit price zero.
    /// - The order moves to `processing` only once all items are applied.
    /// - If any precondition fails, nothing is written. If a write fails
    ///   mid-sequence, earlier writes in the same call are NOT rolled back;
    ///   the call reports a persistence failure and the caller decides
    ///   whether to retry. Retrying a successful call appends the items
    ///   again - the operation is not idempotent.
    pub async fn attempt_add_product(
        &self,
        order_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<Order, AmendError> {
        if order_id <= 0 {
            return Err(AmendError::InvalidInput(format!(
                "Order id must be positive, got {}",
                order_id
            )));
        }
        if product_id <= 0 {
            return Err(AmendError::InvalidInput(format!(
                "Product id must be positive, got {}",
                product_id
            )));
        }
        if quantity <= 0 {
            return Err(AmendError::InvalidInput(format!(
                "Quantity must be positive, got {}",
                quantity
            )));
        }

        let order = self
            .gateway
            .fetch_order(order_id)
            .await?
            .ok_or(AmendError::OrderNotFound(order_id))?;

        if order.payment_method != PaymentMethod::CashOnDelivery {
            tracing::warn!(
                "Rejected amendment of order {}: payment method is {}, not cod",
                order_id,
                order.payment_method
            );
            return Err(AmendError::IneligiblePaymentMethod(order.payment_method));
        }

        let product = self
            .gateway
            .fetch_product(product_id)
            .await?
            .ok_or(AmendError::ProductNotFound(product_id))?;

        let discount = self.rules.discount_for(product_id).await?;
        let unit_price = PriceCalculator::effective_unit_price(product.price, discount);

        self.gateway
            .append_line_item(order_id, product_id, quantity, unit_price)
            .await?;
        self.gateway.recompute_totals(order_id).await?;

        // Bundle reward goes in after the primary item so line-item order is
        // trigger first, free item second
        if let Some(reward) = self.rules.bundle_for(product_id).await? {
            self.gateway
                .append_line_item(
                    order_id,
                    reward.free_product_id,
                    reward.free_quantity,
                    Decimal::ZERO,
                )
                .await?;
            self.gateway.recompute_totals(order_id).await?;

            tracing::info!(
                "Bundle applied to order {}: {} x product {} free",
                order_id,
                reward.free_quantity,
                reward.free_product_id
            );
        }

        self.gateway
            .set_status(order_id, OrderStatus::Processing)
            .await?;

        tracing::info!(
            "Order {} amended: product {} x{} at {}, status now processing",
            order_id,
            product_id,
            quantity,
            unit_price
        );

        self.gateway
            .fetch_order(order_id)
            .await?
            .ok_or_else(|| {
                AmendError::PersistenceFailure(format!(
                    "order {} disappeared after amendment",
                    order_id
                ))
            })
    }
}
