//! Abandoned-cart sweep.
//!
//! Cart creation needs no account, so the registry would otherwise
//! grow without bound. Carts untouched for the configured idle window
//! are evicted here.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::services::CartRegistry;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Spawns the periodic abandoned-cart sweep task.
pub fn spawn_cart_cleanup(
    carts: Arc<CartRegistry>,
    max_idle_secs: i64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let max_idle = chrono::Duration::seconds(max_idle_secs);
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        // The first tick fires immediately; skip it.
        interval.tick().await;

        loop {
            interval.tick().await;
            let swept = carts.sweep_stale(max_idle).await;
            if swept > 0 {
                debug!(swept = swept, "Swept abandoned carts");
            }
        }
    })
}
