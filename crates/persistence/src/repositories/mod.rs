//! Repositories over the key-value storage bridge.
//!
//! Each repository exclusively owns one collection, holds it in memory
//! behind an async lock, and writes the whole collection through to
//! storage on every mutation. Mutations are staged on a copy and
//! committed only after the save succeeds: a storage failure surfaces
//! as an error while the served state stays exactly as it was.
//! Mutations on missing targets surface [`RepoError::NotFound`] instead
//! of silently doing nothing, so callers can distinguish "unchanged"
//! from "target absent".

use std::sync::Arc;

use thiserror::Error;

use crate::storage::{Storage, StorageError};

pub mod catalog;
pub mod content;
pub mod document;
pub mod order_request;
pub mod review;
pub mod upload;

pub use catalog::CatalogRepository;
pub use content::{ContentRepository, PostRepository, ServicePageRepository, TeamMemberRepository};
pub use document::{
    ContactPageRepository, DocumentRepository, HomepageRepository, IntegrationsRepository,
    SettingsRepository,
};
pub use order_request::OrderRequestRepository;
pub use review::ReviewRepository;
pub use upload::UploadRepository;

/// Repository operation error.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    Conflict,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Storage keys, one distinct key per owned collection.
mod keys {
    pub const CATALOG: &str = "catalog";
    pub const ORDER_REQUESTS: &str = "order_requests";
    pub const SERVICE_PAGES: &str = "service_pages";
    pub const POSTS: &str = "posts";
    pub const TEAM_MEMBERS: &str = "team_members";
    pub const CONTACT_PAGE: &str = "contact_page";
    pub const HOMEPAGE: &str = "homepage";
    pub const REVIEWS: &str = "reviews";
    pub const SITE_SETTINGS: &str = "site_settings";
    pub const INTEGRATION_SETTINGS: &str = "integration_settings";
    pub const UPLOADS: &str = "uploads";
}

/// All repositories, constructed once at startup over a shared storage.
pub struct Repositories {
    pub catalog: CatalogRepository,
    pub orders: OrderRequestRepository,
    pub service_pages: ServicePageRepository,
    pub posts: PostRepository,
    pub team: TeamMemberRepository,
    pub contact_page: ContactPageRepository,
    pub homepage: HomepageRepository,
    pub reviews: ReviewRepository,
    pub settings: SettingsRepository,
    pub integrations: IntegrationsRepository,
    pub uploads: UploadRepository,
}

impl Repositories {
    /// Loads every collection from storage.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        Ok(Repositories {
            catalog: CatalogRepository::load(storage.clone(), keys::CATALOG).await?,
            orders: OrderRequestRepository::load(storage.clone(), keys::ORDER_REQUESTS).await?,
            service_pages: ContentRepository::load(storage.clone(), keys::SERVICE_PAGES).await?,
            posts: ContentRepository::load(storage.clone(), keys::POSTS).await?,
            team: ContentRepository::load(storage.clone(), keys::TEAM_MEMBERS).await?,
            contact_page: DocumentRepository::load(storage.clone(), keys::CONTACT_PAGE).await?,
            homepage: DocumentRepository::load(storage.clone(), keys::HOMEPAGE).await?,
            reviews: ReviewRepository::load(storage.clone(), keys::REVIEWS).await?,
            settings: DocumentRepository::load(storage.clone(), keys::SITE_SETTINGS).await?,
            integrations: DocumentRepository::load(storage.clone(), keys::INTEGRATION_SETTINGS)
                .await?,
            uploads: UploadRepository::load(storage, keys::UPLOADS).await?,
        })
    }
}
