//! Application services backing the HTTP handlers.

pub mod carts;
pub mod notify;
pub mod sessions;

pub use carts::CartRegistry;
pub use notify::TelegramNotifier;
pub use sessions::SessionStore;
