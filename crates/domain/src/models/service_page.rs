//! Editable service description pages (CMS).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::content::CmsRecord;

/// A marketing page describing one offered service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePage {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub unit: String,
    pub visible: bool,
    pub sort_order: i32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
}

impl CmsRecord for ServicePage {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn removed_at(&self) -> Option<DateTime<Utc>> {
        self.removed_at
    }
    fn set_removed_at(&mut self, removed_at: Option<DateTime<Utc>>) {
        self.removed_at = removed_at;
    }
    fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Request payload for creating a service page.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,

    pub short_desc: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: f64,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default)]
    pub images: Vec<String>,

    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

fn default_unit() -> String {
    "pcs".to_string()
}

fn default_visible() -> bool {
    true
}

impl CreateServicePageRequest {
    /// Builds the entity; id and timestamps are assigned by the repository.
    pub fn into_page(self) -> ServicePage {
        ServicePage {
            id: 0,
            title: self.title,
            slug: self.slug,
            short_desc: self.short_desc,
            description: self.description,
            price: self.price,
            unit: self.unit,
            visible: self.visible,
            sort_order: self.sort_order,
            images: self.images,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
            removed_at: None,
        }
    }
}

/// Request payload for updating a service page (partial update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    pub short_desc: Option<String>,
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: Option<f64>,

    pub unit: Option<String>,
    pub sort_order: Option<i32>,
    pub images: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl UpdateServicePageRequest {
    pub fn apply(&self, page: &mut ServicePage) {
        if let Some(title) = &self.title {
            page.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            page.slug = slug.clone();
        }
        if let Some(short_desc) = &self.short_desc {
            page.short_desc = Some(short_desc.clone());
        }
        if let Some(description) = &self.description {
            page.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            page.price = price;
        }
        if let Some(unit) = &self.unit {
            page.unit = unit.clone();
        }
        if let Some(sort_order) = self.sort_order {
            page.sort_order = sort_order;
        }
        if let Some(images) = &self.images {
            page.images = images.clone();
        }
        if let Some(meta_title) = &self.meta_title {
            page.meta_title = Some(meta_title.clone());
        }
        if let Some(meta_description) = &self.meta_description {
            page.meta_description = Some(meta_description.clone());
        }
    }
}
