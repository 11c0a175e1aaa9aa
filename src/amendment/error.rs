use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::gateway::GatewayError;
use crate::models::PaymentMethod;
use crate::rules::RuleStoreError;

/// Error types for order amendment operations
///
/// Every failure of `attempt_add_product` is one of these five kinds; none
/// are swallowed and none are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum AmendError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Payment method '{0}' is not eligible for amendment")]
    IneligiblePaymentMethod(PaymentMethod),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

/// Unexpected gateway errors surface as persistence failures
impl From<GatewayError> for AmendError {
    fn from(err: GatewayError) -> Self {
        AmendError::PersistenceFailure(err.to_string())
    }
}

/// Rule table reads happen before the write they feed, so a failed read
/// aborts the call without mutation; it reports as a persistence failure.
impl From<RuleStoreError> for AmendError {
    fn from(err: RuleStoreError) -> Self {
        AmendError::PersistenceFailure(err.to_string())
    }
}

impl IntoResponse for AmendError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AmendError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AmendError::OrderNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Order {} not found", id))
            }
            AmendError::IneligiblePaymentMethod(method) => (
                StatusCode::CONFLICT,
                format!(
                    "Orders paid by '{}' cannot be amended; only cash-on-delivery orders are eligible",
                    method
                ),
            ),
            AmendError::ProductNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Product {} not found", id))
            }
            AmendError::PersistenceFailure(msg) => {
                tracing::error!("Persistence failure during amendment: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to persist order amendment".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
