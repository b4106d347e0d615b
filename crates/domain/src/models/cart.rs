//! Session-scoped cart model.
//!
//! A cart is a transient selection of catalog services. It lives in memory
//! only; once submitted it becomes an [`OrderRequest`](super::OrderRequest)
//! and the cart is cleared.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single selected service with a denormalized snapshot of its
/// category and pricing at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub service_id: String,
    pub category: String,
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub quantity: u32,
    pub line_total: f64,
}

/// Request payload for adding an item to a cart.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[validate(length(min = 1, max = 64, message = "Service id must be 1-64 characters"))]
    pub service_id: String,

    #[validate(length(min = 1, max = 200, message = "Category must be 1-200 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: f64,

    #[serde(default)]
    pub unit: String,

    #[serde(default = "default_quantity")]
    #[validate(custom(function = "shared::validation::validate_quantity"))]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl From<AddCartItemRequest> for CartItem {
    fn from(req: AddCartItemRequest) -> Self {
        let line_total = req.price * req.quantity as f64;
        CartItem {
            service_id: req.service_id,
            category: req.category,
            name: req.name,
            price: req.price,
            unit: req.unit,
            quantity: req.quantity,
            line_total,
        }
    }
}

/// An in-memory selection of services, at most one entry per service id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Adds an item unless one with the same service id is already present.
    ///
    /// Returns whether the item was inserted.
    pub fn add_item(&mut self, item: CartItem) -> bool {
        if self.items.iter().any(|i| i.service_id == item.service_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes an item by service id; absent ids are a no-op.
    pub fn remove_item(&mut self, service_id: &str) {
        self.items.retain(|i| i.service_id != service_id);
    }

    /// Sets the quantity of an item and recomputes its line total.
    ///
    /// Returns false when no item with the given id exists.
    pub fn update_quantity(&mut self, service_id: &str, quantity: u32) -> bool {
        match self.items.iter_mut().find(|i| i.service_id == service_id) {
            Some(item) => {
                item.quantity = quantity;
                item.line_total = item.price * quantity as f64;
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit prices, ignoring quantities.
    ///
    /// This matches what the storefront shows next to the selection; the
    /// quantity-aware figure is [`Cart::total`], which order submission
    /// treats as authoritative.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }

    /// Sum of line totals (price times quantity).
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.line_total).sum()
    }
}
