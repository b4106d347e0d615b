//! Cryptographic utilities for session token generation and hashing.

use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Length of generated session tokens in characters.
const SESSION_TOKEN_LEN: usize = 48;

/// Computes SHA-256 hash of the input and returns it as a hex string.
///
/// Session tokens are stored server-side only as their hash, so a leaked
/// session table cannot be replayed.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a random alphanumeric session token with the `gp_` prefix.
pub fn generate_session_token() -> String {
    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect();
    format!("gp_{}", random)
}
