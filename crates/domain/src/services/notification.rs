//! Order notification message formatting.
//!
//! Message text is assembled here so delivery (Telegram) stays a thin
//! transport concern and the format is unit-testable without I/O.

use crate::models::order_request::OrderRequest;

/// Formats the plain-text summary sent to admins when an order arrives.
pub fn format_order_message(order: &OrderRequest, admin_base_url: &str) -> String {
    let mut message = format!("New order #{}\n\n", order.number);
    message.push_str(&format!(
        "Date: {}\n",
        order.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    message.push_str(&format!("Customer: {}\n", order.name));
    message.push_str(&format!("Phone: {}\n", order.phone));

    if !order.address.is_empty() {
        message.push_str(&format!("Address: {}\n", order.address));
    }
    if let Some(messenger) = &order.messenger {
        message.push_str(&format!("Messenger: {}\n", messenger));
    }

    message.push_str("\nItems:\n");
    for item in &order.items {
        message.push_str(&format!(
            "  - {} x{} @ {} = {}\n",
            item.name, item.quantity, item.price, item.line_total
        ));
    }

    message.push_str(&format!("\nTotal: {}\n", order.total_price));

    if let Some(comment) = &order.comment {
        message.push_str(&format!("\nComment: {}\n", comment));
    }

    if !admin_base_url.is_empty() {
        message.push_str(&format!(
            "\nOpen in admin: {}/admin/orders/{}",
            admin_base_url.trim_end_matches('/'),
            order.id
        ));
    }

    message
}
