//! Order request endpoint handlers.
//!
//! Submission is the one coordinated command in the system: snapshot a
//! non-empty cart, append the order to the persisted ledger, and only
//! then drop the cart from the registry. A storage failure leaves the
//! cart intact so the visitor can retry.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use domain::models::order_request::{
    OrderRequest, OrderStatus, SubmitOrderRequest, UpdateOrderStatusRequest,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_order_submitted;

/// Submit a cart as an order request.
///
/// POST /api/orders
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitOrderRequest>,
) -> Result<(StatusCode, Json<OrderRequest>), ApiError> {
    request.validate()?;

    let cart_id = request.cart_id;
    let cart = state
        .carts
        .get(cart_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?;

    let order = OrderRequest::from_cart(request, &cart, Utc::now())
        .ok_or_else(|| ApiError::Validation("Cannot submit an empty cart".into()))?;

    // Append before dropping the cart: on storage failure it survives.
    let order = state.repos.orders.append(order).await?;
    state.carts.remove(cart_id).await;

    record_order_submitted(order.total_price);
    tracing::info!(order_id = %order.id, number = %order.number, "Order request submitted");

    let notifier = state.notifier.clone();
    let integrations = state.repos.integrations.get().await;
    let notified = order.clone();
    tokio::spawn(async move {
        notifier.notify_order(&notified, &integrations).await;
    });

    Ok((StatusCode::CREATED, Json(order)))
}

/// Query parameters for the admin order listing.
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<String>,
}

/// List order requests, newest first.
///
/// GET /api/admin/orders?status=<new|processing|completed>
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderRequest>>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            OrderStatus::parse(raw)
                .ok_or_else(|| ApiError::Validation(format!("Unknown status: {}", raw)))?,
        ),
        None => None,
    };

    Ok(Json(state.repos.orders.list(status).await))
}

/// Fetch one order request.
///
/// GET /api/admin/orders/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderRequest>, ApiError> {
    Ok(Json(state.repos.orders.get(&id).await?))
}

/// Overwrite an order's status; any status may move to any other.
///
/// PUT /api/admin/orders/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderRequest>, ApiError> {
    Ok(Json(
        state.repos.orders.update_status(&id, request.status).await?,
    ))
}

/// Permanently delete an order request.
///
/// DELETE /api/admin/orders/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.orders.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
