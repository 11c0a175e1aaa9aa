// HTTP handlers for confirmation-page upsell endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::upsell::{UpsellError, UpsellResponse};

/// Handler for GET /api/orders/{order_id}/upsells
/// Returns up to four products related to the order's items
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/upsells",
    params(
        ("order_id" = i64, Path, description = "Order being confirmed")
    ),
    responses(
        (status = 200, description = "Upsell suggestions for the order", body = UpsellResponse),
        (status = 404, description = "Order not found", body = String, example = json!({"error": "Order 7 not found"})),
        (status = 500, description = "Lookup failed", body = String, example = json!({"error": "Failed to load upsell products"}))
    ),
    tag = "upsells"
)]
pub async fn order_upsells(
    State(state): State<crate::AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<UpsellResponse>, UpsellError> {
    let response = state.upsell.confirmation_upsells(order_id).await?;
    Ok(Json(response))
}
