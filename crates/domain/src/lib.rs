//! Domain layer for the Garden Platform backend.
//!
//! This crate contains:
//! - Domain models (catalog, cart, orders, CMS content, reviews, settings)
//! - Request/response payloads with validation
//! - Pure business logic (totals, notification message formatting)

pub mod models;
pub mod services;
