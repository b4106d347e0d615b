//! Key-value storage bridge.
//!
//! Each store persists its whole collection as one JSON document under a
//! distinct key, write-through on every mutation. The trait keeps the
//! backing medium swappable: JSON files in production, memory in tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

/// Storage layer error type.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A persisted key-value namespace of JSON documents.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the document stored under `key`, or `None` if absent.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persists `value` under `key`, replacing any previous document.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key under a data
/// directory. Writes go to a temp file first and are renamed into place
/// so a crash mid-write never corrupts the previous document.
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Creates the storage, ensuring the data directory exists.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        Ok(JsonFileStorage { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{}.json.tmp", key));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads a collection from storage, falling back to the default when the
/// key is absent or its contents fail to parse. Corrupt documents are
/// logged and replaced on the next write rather than crashing startup.
pub(crate) async fn load_or_default<T>(
    storage: &Arc<dyn Storage>,
    key: &str,
) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    match storage.load(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "Stored document failed to parse; using defaults");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}
