//! Submitted order requests.
//!
//! An order request is the persisted record of a visitor's cart submission.
//! Its core fields are immutable after creation; only the status changes,
//! and any status may move to any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::cart::{Cart, CartItem};

/// Processing status of an order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(OrderStatus::New),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// Line-item snapshot carried by an order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub quantity: u32,
    pub line_total: f64,
}

impl From<CartItem> for OrderItem {
    fn from(item: CartItem) -> Self {
        OrderItem {
            name: item.name,
            category: item.category,
            price: item.price,
            unit: item.unit,
            quantity: item.quantity,
            line_total: item.line_total,
        }
    }
}

/// A submitted order request awaiting administrative processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Time-based identifier (millisecond timestamp at creation).
    pub id: String,
    /// Human-readable order number, e.g. `ORD-20260828-143015`.
    pub number: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messenger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub items: Vec<OrderItem>,
    /// Sum of the items' line totals, fixed at submission time.
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Builds a request from a non-empty cart snapshot.
    ///
    /// Returns `None` for an empty cart; an order is only ever created
    /// from at least one selected service. The quantity-aware cart total
    /// is the authoritative price.
    pub fn from_cart(details: SubmitOrderRequest, cart: &Cart, now: DateTime<Utc>) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let total_price = cart.total();
        let items = cart.items.iter().cloned().map(OrderItem::from).collect();

        Some(OrderRequest {
            id: now.timestamp_millis().to_string(),
            number: format!("ORD-{}", now.format("%Y%m%d-%H%M%S")),
            name: details.name,
            address: details.address,
            phone: details.phone,
            messenger: details.messenger,
            comment: details.comment,
            items,
            total_price,
            status: OrderStatus::New,
            created_at: now,
        })
    }
}

/// Request payload for submitting a cart as an order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub cart_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub address: String,

    #[validate(length(min = 5, max = 30, message = "Phone must be 5-30 characters"))]
    pub phone: String,

    #[validate(length(max = 100, message = "Messenger must be at most 100 characters"))]
    pub messenger: Option<String>,

    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

/// Request payload for an admin status change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
