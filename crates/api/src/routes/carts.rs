//! Cart endpoint handlers.
//!
//! Carts are anonymous and in-memory; the server issues an opaque cart
//! id the client keeps for the session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::cart::{AddCartItemRequest, Cart, CartItem};

use crate::app::AppState;
use crate::error::ApiError;

/// Wire representation of a cart and its derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub id: Uuid,
    pub items: Vec<CartItem>,
    /// Sum of unit prices, quantity-blind.
    pub subtotal: f64,
    /// Sum of line totals; this is what order submission charges.
    pub total: f64,
}

impl CartView {
    fn new(id: Uuid, cart: Cart) -> Self {
        let subtotal = cart.subtotal();
        let total = cart.total();
        CartView {
            id,
            items: cart.items,
            subtotal,
            total,
        }
    }
}

/// Create a new empty cart.
///
/// POST /api/carts
pub async fn create_cart(State(state): State<AppState>) -> (StatusCode, Json<CartView>) {
    let id = state.carts.create().await;
    (
        StatusCode::CREATED,
        Json(CartView::new(id, Cart::default())),
    )
}

/// Fetch a cart.
///
/// GET /api/carts/:id
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CartView>, ApiError> {
    let cart = state
        .carts
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?;
    Ok(Json(CartView::new(id, cart)))
}

/// Add a service to a cart; duplicate service ids are ignored.
///
/// POST /api/carts/:id/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddCartItemRequest>,
) -> Result<Json<CartView>, ApiError> {
    request.validate()?;
    let cart = state
        .carts
        .add_item(id, request.into())
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?;
    Ok(Json(CartView::new(id, cart)))
}

#[derive(Debug, serde::Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

/// Set an item's quantity.
///
/// PUT /api/carts/:id/items/:service_id
pub async fn update_quantity(
    State(state): State<AppState>,
    Path((id, service_id)): Path<(Uuid, String)>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<CartView>, ApiError> {
    shared::validation::validate_quantity(request.quantity)
        .map_err(|e| ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default()))?;

    let cart = state
        .carts
        .update_quantity(id, &service_id, request.quantity)
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?
        .ok_or_else(|| ApiError::NotFound("Item not in cart".into()))?;
    Ok(Json(CartView::new(id, cart)))
}

/// Remove an item; removing an absent item is a no-op.
///
/// DELETE /api/carts/:id/items/:service_id
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, service_id)): Path<(Uuid, String)>,
) -> Result<Json<CartView>, ApiError> {
    let cart = state
        .carts
        .remove_item(id, &service_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?;
    Ok(Json(CartView::new(id, cart)))
}

/// Empty the cart.
///
/// DELETE /api/carts/:id/items
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CartView>, ApiError> {
    let cart = state
        .carts
        .clear(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Unknown cart".into()))?;
    Ok(Json(CartView::new(id, cart)))
}
