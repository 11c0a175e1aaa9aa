// HTTP handlers for order amendment endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::amendment::{AddProductRequest, AmendError, AmendmentResponse};

/// Handler for POST /api/orders/{order_id}/amendments
/// Adds a product to an already-placed Cash-on-Delivery order
///
/// Caller authorization (session, request-forgery protection) is the
/// shop platform's responsibility; this handler assumes the caller may act
/// on the given order.
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/amendments",
    params(
        ("order_id" = i64, Path, description = "Order to amend")
    ),
    request_body = AddProductRequest,
    responses(
        (status = 200, description = "Product added, order moved to processing", body = AmendmentResponse),
        (status = 400, description = "Missing or non-positive input", body = String, example = json!({"error": "Quantity must be at least 1"})),
        (status = 404, description = "Order or product not found", body = String, example = json!({"error": "Order 7 not found"})),
        (status = 409, description = "Order is not Cash-on-Delivery", body = String, example = json!({"error": "Orders paid by 'card' cannot be amended; only cash-on-delivery orders are eligible"})),
        (status = 500, description = "Order store write failed", body = String, example = json!({"error": "Failed to persist order amendment"}))
    ),
    tag = "amendments"
)]
pub async fn add_product_to_order(
    State(state): State<crate::AppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<AddProductRequest>,
) -> Result<Json<AmendmentResponse>, AmendError> {
    request
        .validate()
        .map_err(|e| AmendError::InvalidInput(e.to_string()))?;

    let order = state
        .engine
        .attempt_add_product(order_id, request.product_id, request.quantity)
        .await?;

    Ok(Json(order.into()))
}
