//! Shared utilities for the Garden Platform backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Cryptographic utilities (session token generation, hashing)
//! - Password hashing with Argon2id
//! - Common validation logic

pub mod crypto;
pub mod password;
pub mod validation;
