//! Homepage singleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_bg: Option<String>,
    /// Free-form content blocks edited in the admin UI.
    #[serde(default)]
    pub blocks: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Homepage {
    fn default() -> Self {
        Homepage {
            site_name: None,
            logo: None,
            hero_title: None,
            hero_subtitle: None,
            hero_bg: None,
            blocks: Vec::new(),
            meta_title: None,
            meta_description: None,
            updated_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

/// Request payload for merging changes into the homepage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomepageRequest {
    pub site_name: Option<String>,
    pub logo: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_bg: Option<String>,
    pub blocks: Option<Vec<serde_json::Value>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl UpdateHomepageRequest {
    pub fn apply(&self, homepage: &mut Homepage) {
        if let Some(site_name) = &self.site_name {
            homepage.site_name = Some(site_name.clone());
        }
        if let Some(logo) = &self.logo {
            homepage.logo = Some(logo.clone());
        }
        if let Some(hero_title) = &self.hero_title {
            homepage.hero_title = Some(hero_title.clone());
        }
        if let Some(hero_subtitle) = &self.hero_subtitle {
            homepage.hero_subtitle = Some(hero_subtitle.clone());
        }
        if let Some(hero_bg) = &self.hero_bg {
            homepage.hero_bg = Some(hero_bg.clone());
        }
        if let Some(blocks) = &self.blocks {
            homepage.blocks = blocks.clone();
        }
        if let Some(meta_title) = &self.meta_title {
            homepage.meta_title = Some(meta_title.clone());
        }
        if let Some(meta_description) = &self.meta_description {
            homepage.meta_description = Some(meta_description.clone());
        }
    }
}
