//! Global site settings: branding and contact information.
//!
//! These are the settings synchronized with the remote settings endpoint:
//! `GET` returns `{ siteSettings, contacts }`; `POST { section, data }`
//! persists one named section.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Branding and SEO settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: None,
            site_description: None,
            logo: None,
            favicon: None,
            meta_title: None,
            meta_description: None,
            copyright_text: None,
            colors: BTreeMap::new(),
        }
    }
}

/// Public contact details shown in the site header and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        ContactInfo {
            phone: None,
            email: None,
            address: None,
            socials: BTreeMap::new(),
        }
    }
}

/// The full settings document as stored and as returned by `GET`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    #[serde(default)]
    pub site_settings: SiteSettings,
    #[serde(default)]
    pub contacts: ContactInfo,
    #[serde(default = "min_timestamp")]
    pub updated_at: DateTime<Utc>,
}

fn min_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Telegram delivery settings, editable from the admin panel.
///
/// Stored as its own singleton document rather than inside
/// [`SettingsDocument`], so nothing here ever leaks through the public
/// settings endpoint. An empty bot token means "fall back to the static
/// server configuration".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSettings {
    #[serde(default)]
    pub telegram_enabled: bool,
    #[serde(default)]
    pub telegram_bot_token: String,
    #[serde(default)]
    pub telegram_chat_ids: Vec<String>,
    #[serde(default = "min_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        IntegrationSettings {
            telegram_enabled: false,
            telegram_bot_token: String::new(),
            telegram_chat_ids: Vec::new(),
            updated_at: min_timestamp(),
        }
    }
}

/// Request payload for replacing the integration settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationsRequest {
    #[serde(default)]
    pub telegram_enabled: bool,
    #[serde(default)]
    pub telegram_bot_token: String,
    #[serde(default)]
    pub telegram_chat_ids: Vec<String>,
}

impl UpdateIntegrationsRequest {
    pub fn apply(self, settings: &mut IntegrationSettings) {
        settings.telegram_enabled = self.telegram_enabled;
        settings.telegram_bot_token = self.telegram_bot_token;
        settings.telegram_chat_ids = self.telegram_chat_ids;
    }
}

/// Sections addressable by `POST /settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsSection {
    SiteSettings,
    Contacts,
    Homepage,
    Integrations,
}

/// Request payload for persisting one settings section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub section: SettingsSection,
    pub data: serde_json::Value,
}
