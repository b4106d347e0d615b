//! Expired-session sweep.
//!
//! Sessions reject expired tokens on their own; the sweep only keeps
//! the store from accumulating dead entries.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::services::SessionStore;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Spawns the periodic session sweep task.
pub fn spawn_session_cleanup(sessions: Arc<SessionStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        // The first tick fires immediately; skip it.
        interval.tick().await;

        loop {
            interval.tick().await;
            let swept = sessions.sweep_expired().await;
            if swept > 0 {
                debug!(swept = swept, "Swept expired admin sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawned_task_can_be_aborted() {
        let sessions = Arc::new(SessionStore::new(3600));
        let handle = spawn_session_cleanup(sessions);
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
    }
}
