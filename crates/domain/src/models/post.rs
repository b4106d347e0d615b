//! Portfolio / blog posts (CMS).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::content::CmsRecord;

/// A published piece of portfolio or blog content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
}

impl CmsRecord for Post {
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

/// Request payload for creating a post.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,

    pub excerpt: Option<String>,
    pub body: Option<String>,

    #[serde(default)]
    pub gallery: Vec<String>,

    pub published_at: Option<DateTime<Utc>>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl CreatePostRequest {
    pub fn into_post(self) -> Post {
        Post {
            id: 0,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            body: self.body,
            gallery: self.gallery,
            published_at: self.published_at,
            visible: self.visible,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
            removed_at: None,
        }
    }
}

/// Request payload for updating a post (partial update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl UpdatePostRequest {
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = Some(excerpt.clone());
        }
        if let Some(body) = &self.body {
            post.body = Some(body.clone());
        }
        if let Some(gallery) = &self.gallery {
            post.gallery = gallery.clone();
        }
        if let Some(published_at) = self.published_at {
            post.published_at = Some(published_at);
        }
        if let Some(meta_title) = &self.meta_title {
            post.meta_title = Some(meta_title.clone());
        }
        if let Some(meta_description) = &self.meta_description {
            post.meta_description = Some(meta_description.clone());
        }
    }
}
