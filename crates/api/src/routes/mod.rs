//! HTTP route handlers.

pub mod auth;
pub mod carts;
pub mod catalog;
pub mod health;
pub mod orders;
pub mod pages;
pub mod posts;
pub mod reviews;
pub mod service_pages;
pub mod settings;
pub mod team;
pub mod uploads;
