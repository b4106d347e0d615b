//! Registry of accepted image uploads.
//!
//! The files themselves live on disk under the upload directory; this
//! repository only tracks the metadata shown in the admin panel.

use std::sync::Arc;

use tokio::sync::RwLock;

use domain::models::upload::UploadedImage;

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

pub struct UploadRepository {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<Vec<UploadedImage>>,
}

impl UploadRepository {
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(UploadRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    /// Lists uploads newest-first.
    pub async fn list(&self) -> Vec<UploadedImage> {
        self.state.read().await.clone()
    }

    /// Records an accepted upload. The entry is committed only once the
    /// save succeeds.
    pub async fn register(&self, image: UploadedImage) -> Result<UploadedImage, RepoError> {
        let mut uploads = self.state.write().await;
        let mut staged = uploads.clone();
        staged.insert(0, image.clone());

        let raw = serde_json::to_string(&staged).map_err(StorageError::from)?;
        self.storage.save(self.key, &raw).await?;
        *uploads = staged;
        Ok(image)
    }
}
