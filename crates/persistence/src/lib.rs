//! Persistence layer for the Garden Platform backend.
//!
//! This crate contains:
//! - The [`storage::Storage`] key-value bridge (JSON file and in-memory
//!   implementations)
//! - One repository per owned collection, write-through on every mutation

pub mod repositories;
pub mod storage;

pub use repositories::{RepoError, Repositories};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};
