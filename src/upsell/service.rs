use std::sync::Arc;

use crate::gateway::OrderGateway;
use crate::models::{OrderStatus, PaymentMethod};
use crate::upsell::{UpsellCatalog, UpsellError, UpsellResponse, UPSELL_LIMIT};

/// Service for the confirmation-page upsell block
#[derive(Clone)]
pub struct UpsellService {
    gateway: Arc<dyn OrderGateway>,
    catalog: Arc<dyn UpsellCatalog>,
}

impl UpsellService {
    /// Create a new UpsellService
    pub fn new(gateway: Arc<dyn OrderGateway>, catalog: Arc<dyn UpsellCatalog>) -> Self {
        Self { gateway, catalog }
    }

    /// Build the upsell block for an order's confirmation page
    ///
    /// For Cash-on-Delivery orders this also parks the order `on-hold`, so
    /// it stays amendable while the customer is looking at the page. Orders
    /// paid any other way get an empty, ineligible response and are left
    /// untouched. Products already in the order are never suggested, and at
    /// most four suggestions are returned.
    pub async fn confirmation_upsells(&self, order_id: i64) -> Result<UpsellResponse, UpsellError> {
        let order = self
            .gateway
            .fetch_order(order_id)
            .await?
            .ok_or(UpsellError::OrderNotFound(order_id))?;

        if order.payment_method != PaymentMethod::CashOnDelivery {
            tracing::debug!(
                "Order {} paid by {}; no upsells offered",
                order_id,
                order.payment_method
            );
            return Ok(UpsellResponse {
                order_id,
                eligible: false,
                products: Vec::new(),
            });
        }

        self.gateway.set_status(order_id, OrderStatus::OnHold).await?;
        tracing::info!("Order {} parked on-hold for confirmation-page upsells", order_id);

        let ordered_ids: Vec<i64> = order.items.iter().map(|item| item.product_id).collect();
        let candidates = self.catalog.related_products(&ordered_ids).await?;

        let products = candidates
            .into_iter()
            .filter(|product| !ordered_ids.contains(&product.id))
            .take(UPSELL_LIMIT)
            .map(|product| product.into())
            .collect();

        Ok(UpsellResponse {
            order_id,
            eligible: true,
            products,
        })
    }
}
