//! Background jobs.

mod cart_cleanup;
mod session_cleanup;

pub use cart_cleanup::spawn_cart_cleanup;
pub use session_cleanup::spawn_session_cleanup;
