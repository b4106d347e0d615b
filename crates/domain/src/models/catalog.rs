//! Pricing catalog domain model.
//!
//! The catalog is a flat, explicitly ordered list of service categories,
//! each owning an ordered list of priced services. Category order is
//! significant and preserved as stored, never derived from insertion.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single priced service inside a category.
///
/// Service ids are unique within their owning category only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogService {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub unit: String,
}

/// A service category, identified by a human-assigned slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Legacy catalogs omit the flag entirely; absence means visible.
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub services: Vec<CatalogService>,
}

fn default_visible() -> bool {
    true
}

impl ServiceCategory {
    /// Looks up a service by id within this category.
    pub fn service(&self, service_id: &str) -> Option<&CatalogService> {
        self.services.iter().find(|s| s.id == service_id)
    }
}

/// Request payload for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl From<CreateCategoryRequest> for ServiceCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        ServiceCategory {
            slug: req.slug,
            title: req.title,
            description: req.description,
            icon: req.icon,
            visible: req.visible,
            services: Vec::new(),
        }
    }
}

/// Request payload for updating category fields (partial update).
///
/// The slug and service list are not patchable through this request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Request payload for adding a service to a category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceRequest {
    #[validate(length(min = 1, max = 64, message = "Service id must be 1-64 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: f64,

    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: String,
}

impl From<AddServiceRequest> for CatalogService {
    fn from(req: AddServiceRequest) -> Self {
        CatalogService {
            id: req.id,
            name: req.name,
            price: req.price,
            unit: req.unit,
        }
    }
}

/// Request payload for updating service fields (partial update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: Option<String>,
}

impl UpdateServiceRequest {
    /// Merges the patch into an existing service.
    pub fn apply(&self, service: &mut CatalogService) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(unit) = &self.unit {
            service.unit = unit.clone();
        }
    }
}

/// Request payload for reordering categories within one visibility partition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCategoriesRequest {
    pub slugs: Vec<String>,
    /// Which partition the slugs describe: the visible or the hidden one.
    pub visible: bool,
}

/// Request payload for reordering services within a category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderServicesRequest {
    pub ids: Vec<String>,
}
