//! Admin session store.
//!
//! Login issues a random bearer token; only its SHA-256 digest is held
//! server-side, together with an expiry. Presenting the token again
//! within its lifetime authorizes admin routes, so an admin session
//! survives page reloads without any client-visible secret beyond the
//! token itself.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use shared::crypto::{generate_session_token, sha256_hex};

/// A freshly issued session. The raw token is only ever returned here;
/// the store keeps just its digest.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// In-memory registry of active admin sessions, keyed by token digest.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        SessionStore {
            ttl: Duration::seconds(ttl_secs),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issues a new session token.
    pub async fn issue(&self) -> Session {
        let token = generate_session_token();
        let expires_at = Utc::now() + self.ttl;

        let mut sessions = self.sessions.write().await;
        sessions.insert(sha256_hex(&token), expires_at);

        Session { token, expires_at }
    }

    /// Whether the token belongs to an unexpired session.
    pub async fn authorize(&self, token: &str) -> bool {
        let sessions = self.sessions.read().await;
        match sessions.get(&sha256_hex(token)) {
            Some(expires_at) => *expires_at > Utc::now(),
            None => false,
        }
    }

    /// Revokes the session for the given token, expired or not.
    pub async fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&sha256_hex(token));
    }

    /// Drops expired sessions; returns how many were removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, expires_at| *expires_at > now);
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issued_token_authorizes() {
        let store = SessionStore::new(3600);
        let session = store.issue().await;
        assert!(store.authorize(&session.token).await);
        assert!(!store.authorize("gp_forged").await);
    }

    #[tokio::test]
    async fn test_revoked_token_is_rejected() {
        let store = SessionStore::new(3600);
        let session = store.issue().await;
        store.revoke(&session.token).await;
        assert!(!store.authorize(&session.token).await);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_and_swept() {
        let store = SessionStore::new(-1);
        let session = store.issue().await;
        assert!(!store.authorize(&session.token).await);
        assert_eq!(store.sweep_expired().await, 1);
        assert_eq!(store.sweep_expired().await, 0);
    }
}
