//! Generic repository for CMS entities.
//!
//! Service pages, posts and team members share one lifecycle (visibility,
//! soft-delete, audit timestamps), so a single repository parameterized
//! over [`CmsRecord`] serves all three collections.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use domain::models::content::CmsRecord;
use domain::models::{Post, ServicePage, TeamMember};

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

pub type ServicePageRepository = ContentRepository<ServicePage>;
pub type PostRepository = ContentRepository<Post>;
pub type TeamMemberRepository = ContentRepository<TeamMember>;

/// Repository for one CMS collection.
pub struct ContentRepository<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<Vec<T>>,
}

impl<T> ContentRepository<T>
where
    T: CmsRecord + Clone + Serialize + DeserializeOwned + Send + Sync,
{
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(ContentRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, entries: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.storage.save(self.key, &raw).await
    }

    /// Lists the collection. With `include_hidden` false this is the
    /// public view: entries that are hidden or soft-removed are filtered
    /// at read time, never partitioned in storage.
    pub async fn list(&self, include_hidden: bool) -> Vec<T> {
        let entries = self.state.read().await;
        entries
            .iter()
            .filter(|e| include_hidden || e.listed())
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<T, RepoError> {
        let entries = self.state.read().await;
        entries
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    /// Assigns the next id, stamps the audit timestamps and appends.
    pub async fn create(&self, mut entity: T) -> Result<T, RepoError> {
        let mut entries = self.state.write().await;

        let next_id = entries.iter().map(|e| e.id()).max().unwrap_or(0) + 1;
        entity.set_id(next_id);
        entity.stamp_created(Utc::now());

        let mut staged = entries.clone();
        staged.push(entity.clone());

        self.persist(&staged).await?;
        *entries = staged;
        Ok(entity)
    }

    /// Applies an entity-specific merge and refreshes `updated_at`.
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<T, RepoError>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.state.write().await;
        let mut staged = entries.clone();
        let entity = staged
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RepoError::NotFound)?;

        apply(entity);
        entity.touch(Utc::now());
        let updated = entity.clone();

        self.persist(&staged).await?;
        *entries = staged;
        Ok(updated)
    }

    /// Strict boolean flip of the visibility flag.
    pub async fn toggle_visibility(&self, id: i64) -> Result<T, RepoError> {
        self.update(id, |e| e.set_visible(!e.visible())).await
    }

    /// Marks the entity removed; it stays in the collection and remains
    /// retrievable by id.
    pub async fn soft_remove(&self, id: i64) -> Result<T, RepoError> {
        self.update(id, |e| e.set_removed_at(Some(Utc::now()))).await
    }

    /// Clears the tombstone. The visibility flag is deliberately left
    /// untouched: a hidden-and-removed entity restores as hidden.
    pub async fn restore(&self, id: i64) -> Result<T, RepoError> {
        self.update(id, |e| e.set_removed_at(None)).await
    }
}
