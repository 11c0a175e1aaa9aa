use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::gateway::GatewayError;

/// Error types for upsell operations
#[derive(Debug, thiserror::Error)]
pub enum UpsellError {
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UpsellError {
    fn from(err: sqlx::Error) -> Self {
        UpsellError::DatabaseError(err.to_string())
    }
}

impl From<GatewayError> for UpsellError {
    fn from(err: GatewayError) -> Self {
        UpsellError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for UpsellError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            UpsellError::OrderNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Order {} not found", id))
            }
            UpsellError::DatabaseError(msg) => {
                tracing::error!("Database error while building upsells: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load upsell products".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
