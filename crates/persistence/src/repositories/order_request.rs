//! Order request ledger.

use std::sync::Arc;

use tokio::sync::RwLock;

use domain::models::order_request::{OrderRequest, OrderStatus};

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

/// Append-only ledger of submitted order requests, stored newest-first.
pub struct OrderRequestRepository {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<Vec<OrderRequest>>,
}

impl OrderRequestRepository {
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(OrderRequestRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, requests: &[OrderRequest]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(requests)?;
        self.storage.save(self.key, &raw).await
    }

    /// Lists requests newest-first, optionally filtered by status.
    pub async fn list(&self, status: Option<OrderStatus>) -> Vec<OrderRequest> {
        let requests = self.state.read().await;
        requests
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<OrderRequest, RepoError> {
        let requests = self.state.read().await;
        requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    /// Prepends a new request so listings stay newest-first.
    ///
    /// Ids are millisecond timestamps; two submissions in the same
    /// millisecond get the id bumped until unique.
    pub async fn append(&self, mut request: OrderRequest) -> Result<OrderRequest, RepoError> {
        let mut requests = self.state.write().await;

        while requests.iter().any(|r| r.id == request.id) {
            let bumped = request.id.parse::<i64>().map(|n| n + 1);
            request.id = match bumped {
                Ok(n) => n.to_string(),
                Err(_) => return Err(RepoError::Conflict),
            };
        }

        let mut staged = requests.clone();
        staged.insert(0, request.clone());

        self.persist(&staged).await?;
        *requests = staged;
        Ok(request)
    }

    /// Overwrites the status; any state may move to any other.
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<OrderRequest, RepoError> {
        let mut requests = self.state.write().await;
        let mut staged = requests.clone();
        let request = staged
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepoError::NotFound)?;

        request.status = status;
        let updated = request.clone();

        self.persist(&staged).await?;
        *requests = staged;
        Ok(updated)
    }

    /// Permanently removes a request; there is no tombstone for orders.
    pub async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut requests = self.state.write().await;
        let mut staged = requests.clone();
        let before = staged.len();
        staged.retain(|r| r.id != id);
        if staged.len() == before {
            return Err(RepoError::NotFound);
        }

        self.persist(&staged).await?;
        *requests = staged;
        Ok(())
    }
}
