//! Contact page singleton.
//!
//! Exactly one logical contact page exists per site; updates merge into
//! the single record and refresh its `updated_at` stamp.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub messengers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed: Option<String>,
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
    /// Legal requisites (company name, tax ids).
    #[serde(default)]
    pub requisites: BTreeMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for ContactPage {
    fn default() -> Self {
        ContactPage {
            phones: Vec::new(),
            messengers: BTreeMap::new(),
            address: None,
            map_embed: None,
            socials: BTreeMap::new(),
            requisites: BTreeMap::new(),
            updated_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

/// Request payload for merging changes into the contact page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPageRequest {
    pub phones: Option<Vec<String>>,
    pub messengers: Option<BTreeMap<String, String>>,
    pub address: Option<String>,
    pub map_embed: Option<String>,
    pub socials: Option<BTreeMap<String, String>>,
    pub requisites: Option<BTreeMap<String, String>>,
}

impl UpdateContactPageRequest {
    pub fn apply(&self, page: &mut ContactPage) {
        if let Some(phones) = &self.phones {
            page.phones = phones.clone();
        }
        if let Some(messengers) = &self.messengers {
            page.messengers = messengers.clone();
        }
        if let Some(address) = &self.address {
            page.address = Some(address.clone());
        }
        if let Some(map_embed) = &self.map_embed {
            page.map_embed = Some(map_embed.clone());
        }
        if let Some(socials) = &self.socials {
            page.socials = socials.clone();
        }
        if let Some(requisites) = &self.requisites {
            page.requisites = requisites.clone();
        }
    }
}
