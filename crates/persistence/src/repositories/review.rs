//! Customer review repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use domain::models::review::{Review, ReviewStatus};

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

/// Repository for customer reviews, stored newest-first.
pub struct ReviewRepository {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<Vec<Review>>,
}

impl ReviewRepository {
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(ReviewRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, reviews: &[Review]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(reviews)?;
        self.storage.save(self.key, &raw).await
    }

    /// Lists reviews newest-first, optionally filtered by moderation
    /// status. The public site passes `Some(Approved)`.
    pub async fn list(&self, status: Option<ReviewStatus>) -> Vec<Review> {
        let reviews = self.state.read().await;
        reviews
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect()
    }

    /// Assigns the next id and creation timestamp, prepends.
    pub async fn create(&self, mut review: Review) -> Result<Review, RepoError> {
        let mut reviews = self.state.write().await;

        review.id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        review.created_at = Utc::now();

        let mut staged = reviews.clone();
        staged.insert(0, review.clone());

        self.persist(&staged).await?;
        *reviews = staged;
        Ok(review)
    }

    /// Moderation decision: direct status overwrite.
    pub async fn update_status(
        &self,
        id: i64,
        status: ReviewStatus,
    ) -> Result<Review, RepoError> {
        let mut reviews = self.state.write().await;
        let mut staged = reviews.clone();
        let review = staged
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepoError::NotFound)?;

        review.status = status;
        let updated = review.clone();

        self.persist(&staged).await?;
        *reviews = staged;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut reviews = self.state.write().await;
        let mut staged = reviews.clone();
        let before = staged.len();
        staged.retain(|r| r.id != id);
        if staged.len() == before {
            return Err(RepoError::NotFound);
        }

        self.persist(&staged).await?;
        *reviews = staged;
        Ok(())
    }
}
