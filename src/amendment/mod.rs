// Order amendment module
//
// Implements the post-purchase "add product to order" path for
// Cash-on-Delivery orders: flat discounts, bundle rewards, and the
// transition to `processing`.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pricing;

pub use engine::*;
pub use error::*;
pub use handlers::*;
pub use models::*;
pub use pricing::*;
