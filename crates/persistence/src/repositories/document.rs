//! Generic repository for singleton configuration documents.
//!
//! Contact page, homepage and the settings document are each exactly one
//! logical record; updates merge into that record and are written
//! through immediately.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use domain::models::{ContactPage, Homepage, IntegrationSettings, SettingsDocument};

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

pub type ContactPageRepository = DocumentRepository<ContactPage>;
pub type HomepageRepository = DocumentRepository<Homepage>;
pub type SettingsRepository = DocumentRepository<SettingsDocument>;
pub type IntegrationsRepository = DocumentRepository<IntegrationSettings>;

/// Repository for one singleton document.
pub struct DocumentRepository<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<T>,
}

impl<T> DocumentRepository<T>
where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync,
{
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(DocumentRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, document: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(document)?;
        self.storage.save(self.key, &raw).await
    }

    pub async fn get(&self) -> T {
        self.state.read().await.clone()
    }

    /// Merges changes into the single record. The caller's closure is
    /// responsible for refreshing any `updated_at` stamp the document
    /// carries. The merge is staged on a copy; a failed save leaves the
    /// served document unchanged.
    pub async fn update<F>(&self, apply: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut T),
    {
        let mut document = self.state.write().await;
        let mut staged = document.clone();
        apply(&mut staged);

        self.persist(&staged).await?;
        *document = staged;
        Ok(document.clone())
    }
}
