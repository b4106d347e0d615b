//! Catalog repository: ordered categories with their priced services.

use std::sync::Arc;

use tokio::sync::RwLock;

use domain::models::catalog::{
    CatalogService, ServiceCategory, UpdateCategoryRequest, UpdateServiceRequest,
};

use super::RepoError;
use crate::storage::{load_or_default, Storage, StorageError};

/// Repository for the pricing catalog.
///
/// Category order is explicit: the stored `Vec` order is the display
/// order, partitioned by visibility when reordering. Mutations are
/// staged on a copy and committed to the served state only after the
/// save succeeds, so a storage failure leaves the collection as it was.
pub struct CatalogRepository {
    key: &'static str,
    storage: Arc<dyn Storage>,
    state: RwLock<Vec<ServiceCategory>>,
}

impl CatalogRepository {
    pub async fn load(storage: Arc<dyn Storage>, key: &'static str) -> Result<Self, StorageError> {
        let state = load_or_default(&storage, key).await?;
        Ok(CatalogRepository {
            key,
            storage,
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, categories: &[ServiceCategory]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(categories)?;
        self.storage.save(self.key, &raw).await
    }

    /// Lists categories in stored order; hidden ones only when asked.
    pub async fn list(&self, include_hidden: bool) -> Vec<ServiceCategory> {
        let categories = self.state.read().await;
        categories
            .iter()
            .filter(|c| include_hidden || c.visible)
            .cloned()
            .collect()
    }

    pub async fn get(&self, slug: &str) -> Result<ServiceCategory, RepoError> {
        let categories = self.state.read().await;
        categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    /// Appends a category; the slug must be unique across the catalog.
    pub async fn add_category(
        &self,
        category: ServiceCategory,
    ) -> Result<ServiceCategory, RepoError> {
        let mut categories = self.state.write().await;
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(RepoError::Conflict);
        }

        let mut staged = categories.clone();
        staged.push(category.clone());

        self.persist(&staged).await?;
        *categories = staged;
        Ok(category)
    }

    pub async fn update_category(
        &self,
        slug: &str,
        patch: &UpdateCategoryRequest,
    ) -> Result<ServiceCategory, RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;

        if let Some(title) = &patch.title {
            category.title = title.clone();
        }
        if let Some(description) = &patch.description {
            category.description = description.clone();
        }
        if let Some(icon) = &patch.icon {
            category.icon = icon.clone();
        }
        let updated = category.clone();

        self.persist(&staged).await?;
        *categories = staged;
        Ok(updated)
    }

    pub async fn delete_category(&self, slug: &str) -> Result<(), RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let before = staged.len();
        staged.retain(|c| c.slug != slug);
        if staged.len() == before {
            return Err(RepoError::NotFound);
        }

        self.persist(&staged).await?;
        *categories = staged;
        Ok(())
    }

    /// Flips the visibility flag. Double-toggling restores the original
    /// value; catalogs stored without the flag deserialize as visible.
    pub async fn toggle_category_visibility(
        &self,
        slug: &str,
    ) -> Result<ServiceCategory, RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;

        category.visible = !category.visible;
        let updated = category.clone();

        self.persist(&staged).await?;
        *categories = staged;
        Ok(updated)
    }

    /// Replaces the order of one visibility partition.
    ///
    /// The reordered visible partition goes first and the hidden one is
    /// appended after it, keeping its prior relative order; when the
    /// hidden partition is reordered the roles swap. Slugs missing from
    /// `slugs` but present in the partition keep their prior relative
    /// order after the listed ones, so nothing is silently dropped.
    pub async fn reorder_categories(
        &self,
        slugs: &[String],
        visible_group: bool,
    ) -> Result<Vec<ServiceCategory>, RepoError> {
        let mut categories = self.state.write().await;

        let (reordered_partition, untouched): (Vec<ServiceCategory>, Vec<ServiceCategory>) =
            categories
                .iter()
                .cloned()
                .partition(|c| c.visible == visible_group);

        let mut remaining = reordered_partition;
        let mut reordered = Vec::with_capacity(remaining.len());
        for slug in slugs {
            if let Some(pos) = remaining.iter().position(|c| &c.slug == slug) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.append(&mut remaining);

        let staged: Vec<ServiceCategory> = if visible_group {
            reordered.into_iter().chain(untouched).collect()
        } else {
            untouched.into_iter().chain(reordered).collect()
        };

        self.persist(&staged).await?;
        *categories = staged;
        Ok(categories.clone())
    }

    /// Appends a service; its id must be unique within the category.
    pub async fn add_service(
        &self,
        slug: &str,
        service: CatalogService,
    ) -> Result<CatalogService, RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;

        if category.services.iter().any(|s| s.id == service.id) {
            return Err(RepoError::Conflict);
        }
        category.services.push(service.clone());

        self.persist(&staged).await?;
        *categories = staged;
        Ok(service)
    }

    pub async fn update_service(
        &self,
        slug: &str,
        service_id: &str,
        patch: &UpdateServiceRequest,
    ) -> Result<CatalogService, RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;
        let service = category
            .services
            .iter_mut()
            .find(|s| s.id == service_id)
            .ok_or(RepoError::NotFound)?;

        patch.apply(service);
        let updated = service.clone();

        self.persist(&staged).await?;
        *categories = staged;
        Ok(updated)
    }

    pub async fn delete_service(&self, slug: &str, service_id: &str) -> Result<(), RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;

        let before = category.services.len();
        category.services.retain(|s| s.id != service_id);
        if category.services.len() == before {
            return Err(RepoError::NotFound);
        }

        self.persist(&staged).await?;
        *categories = staged;
        Ok(())
    }

    /// Replaces the service order within one category. Ids missing from
    /// `ids` keep their prior relative order after the listed ones.
    pub async fn reorder_services(
        &self,
        slug: &str,
        ids: &[String],
    ) -> Result<ServiceCategory, RepoError> {
        let mut categories = self.state.write().await;
        let mut staged = categories.clone();
        let category = staged
            .iter_mut()
            .find(|c| c.slug == slug)
            .ok_or(RepoError::NotFound)?;

        let mut remaining = std::mem::take(&mut category.services);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ids {
            if let Some(pos) = remaining.iter().position(|s| &s.id == id) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.append(&mut remaining);
        category.services = reordered;
        let updated = category.clone();

        self.persist(&staged).await?;
        *categories = staged;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::FlakyStorage;
    use crate::storage::MemoryStorage;

    fn category(slug: &str, visible: bool) -> ServiceCategory {
        ServiceCategory {
            slug: slug.into(),
            title: format!("Category {}", slug),
            description: String::new(),
            icon: String::new(),
            visible,
            services: Vec::new(),
        }
    }

    fn service(id: &str, price: f64) -> CatalogService {
        CatalogService {
            id: id.into(),
            name: format!("Service {}", id),
            price,
            unit: "tree".into(),
        }
    }

    async fn repo() -> CatalogRepository {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        CatalogRepository::load(storage, "catalog").await.unwrap()
    }

    #[tokio::test]
    async fn test_add_category_rejects_duplicate_slug() {
        let repo = repo().await;
        repo.add_category(category("lawn", true)).await.unwrap();
        let result = repo.add_category(category("lawn", true)).await;
        assert!(matches!(result, Err(RepoError::Conflict)));
    }

    #[tokio::test]
    async fn test_add_service_roundtrips_fields() {
        let repo = repo().await;
        repo.add_category(category("green-care", true)).await.unwrap();
        repo.add_service("green-care", service("gc1", 1500.0))
            .await
            .unwrap();

        let fetched = repo.get("green-care").await.unwrap();
        assert_eq!(fetched.services.len(), 1);
        assert_eq!(fetched.services[0], service("gc1", 1500.0));
    }

    #[tokio::test]
    async fn test_add_service_rejects_duplicate_id_within_category() {
        let repo = repo().await;
        repo.add_category(category("green-care", true)).await.unwrap();
        repo.add_service("green-care", service("gc1", 1500.0))
            .await
            .unwrap();
        let result = repo.add_service("green-care", service("gc1", 2000.0)).await;
        assert!(matches!(result, Err(RepoError::Conflict)));

        // Same id in another category is fine: uniqueness is per category.
        repo.add_category(category("lawn", true)).await.unwrap();
        repo.add_service("lawn", service("gc1", 800.0)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_service_on_missing_target_is_not_found() {
        let repo = repo().await;
        repo.add_category(category("lawn", true)).await.unwrap();
        let patch = UpdateServiceRequest {
            name: None,
            price: Some(900.0),
            unit: None,
        };
        let result = repo.update_service("lawn", "missing", &patch).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
        let result = repo.update_service("missing", "x", &patch).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_visibility() {
        let repo = repo().await;
        repo.add_category(category("lawn", true)).await.unwrap();

        let once = repo.toggle_category_visibility("lawn").await.unwrap();
        assert!(!once.visible);
        let twice = repo.toggle_category_visibility("lawn").await.unwrap();
        assert!(twice.visible);
    }

    #[tokio::test]
    async fn test_reorder_visible_partition_keeps_hidden_after() {
        let repo = repo().await;
        repo.add_category(category("a", true)).await.unwrap();
        repo.add_category(category("b", true)).await.unwrap();
        repo.add_category(category("c", false)).await.unwrap();

        let order = repo
            .reorder_categories(&["b".into(), "a".into()], true)
            .await
            .unwrap();
        let slugs: Vec<&str> = order.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_reorder_hidden_partition_keeps_visible_first() {
        let repo = repo().await;
        repo.add_category(category("a", true)).await.unwrap();
        repo.add_category(category("x", false)).await.unwrap();
        repo.add_category(category("y", false)).await.unwrap();

        let order = repo
            .reorder_categories(&["y".into(), "x".into()], false)
            .await
            .unwrap();
        let slugs: Vec<&str> = order.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "y", "x"]);
    }

    #[tokio::test]
    async fn test_reorder_services_keeps_unlisted_ids() {
        let repo = repo().await;
        repo.add_category(category("lawn", true)).await.unwrap();
        for id in ["lw1", "lw2", "lw3"] {
            repo.add_service("lawn", service(id, 100.0)).await.unwrap();
        }

        let updated = repo
            .reorder_services("lawn", &["lw3".into(), "lw1".into()])
            .await
            .unwrap();
        let ids: Vec<&str> = updated.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["lw3", "lw1", "lw2"]);
    }

    #[tokio::test]
    async fn test_list_excludes_hidden_by_default() {
        let repo = repo().await;
        repo.add_category(category("a", true)).await.unwrap();
        repo.add_category(category("b", false)).await.unwrap();

        assert_eq!(repo.list(false).await.len(), 1);
        assert_eq!(repo.list(true).await.len(), 2);
    }

    #[tokio::test]
    async fn test_mutations_write_through_to_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let repo = CatalogRepository::load(storage.clone(), "catalog")
            .await
            .unwrap();
        repo.add_category(category("lawn", true)).await.unwrap();

        // A fresh repository over the same storage sees the mutation.
        let reloaded = CatalogRepository::load(storage, "catalog").await.unwrap();
        assert_eq!(reloaded.list(true).await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_served_state_untouched() {
        let storage = Arc::new(FlakyStorage::new());
        let repo = CatalogRepository::load(storage.clone(), "catalog")
            .await
            .unwrap();
        repo.add_category(category("lawn", true)).await.unwrap();

        storage.fail_writes(true);
        let result = repo.add_category(category("ponds", true)).await;
        assert!(matches!(result, Err(RepoError::Storage(_))));
        assert_eq!(repo.list(true).await.len(), 1);

        let result = repo.toggle_category_visibility("lawn").await;
        assert!(matches!(result, Err(RepoError::Storage(_))));
        assert!(repo.get("lawn").await.unwrap().visible);

        // Once writes recover the same mutation goes through cleanly.
        storage.fail_writes(false);
        repo.add_category(category("ponds", true)).await.unwrap();
        assert_eq!(repo.list(true).await.len(), 2);
    }
}
