// Confirmation-page upsell module
//
// Read path behind the "frequently bought together" block on the order
// confirmation page: products sharing a category with the order's items.
// First viewing a Cash-on-Delivery order here also parks it `on-hold`, the
// documented side effect that keeps the order amendable until the customer
// leaves the page. The amendment engine itself never performs that
// transition.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::*;
pub use handlers::*;
pub use models::*;
pub use repository::*;
pub use service::*;

use async_trait::async_trait;

use crate::models::Product;

/// Number of suggestions shown on the confirmation page
pub(crate) const UPSELL_LIMIT: usize = 4;

/// Catalog lookup contract for upsell candidates
///
/// Implementations return products sharing a category with the given
/// products; the service owns the display rules (ordered products are
/// dropped, at most [`UPSELL_LIMIT`] survive), so implementations may
/// over-return.
#[async_trait]
pub trait UpsellCatalog: Send + Sync {
    async fn related_products(&self, product_ids: &[i64]) -> Result<Vec<Product>, UpsellError>;
}
