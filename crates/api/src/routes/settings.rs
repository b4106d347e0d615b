//! Site settings endpoint handlers.
//!
//! `GET` returns the full document as `{ siteSettings, contacts }`.
//! `POST { section, data }` replaces one named section; the `homepage`
//! and `integrations` sections are routed to their own singletons rather
//! than the settings document, matching how the admin panel addresses
//! them. Integration settings are additionally reachable as a dedicated
//! admin resource and never appear in the public document.

use axum::{extract::State, Json};
use chrono::Utc;

use domain::models::settings::{
    ContactInfo, IntegrationSettings, SettingsDocument, SettingsSection, SiteSettings,
    UpdateIntegrationsRequest, UpdateSettingsRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Json<SettingsDocument> {
    Json(state.repos.settings.get().await)
}

/// GET /api/admin/settings/integrations
pub async fn get_integrations(State(state): State<AppState>) -> Json<IntegrationSettings> {
    Json(state.repos.integrations.get().await)
}

/// PUT /api/admin/settings/integrations
pub async fn update_integrations(
    State(state): State<AppState>,
    Json(request): Json<UpdateIntegrationsRequest>,
) -> Result<Json<IntegrationSettings>, ApiError> {
    let settings = state
        .repos
        .integrations
        .update(|settings| {
            request.apply(settings);
            settings.updated_at = Utc::now();
        })
        .await?;
    Ok(Json(settings))
}

/// POST /api/admin/settings
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match request.section {
        SettingsSection::SiteSettings => {
            let site_settings: SiteSettings = serde_json::from_value(request.data)
                .map_err(|e| ApiError::Validation(format!("Invalid siteSettings: {}", e)))?;
            let document = state
                .repos
                .settings
                .update(|doc| {
                    doc.site_settings = site_settings;
                    doc.updated_at = Utc::now();
                })
                .await?;
            Ok(Json(serde_json::to_value(document).map_err(|e| {
                ApiError::Internal(format!("Serialization failed: {}", e))
            })?))
        }
        SettingsSection::Contacts => {
            let contacts: ContactInfo = serde_json::from_value(request.data)
                .map_err(|e| ApiError::Validation(format!("Invalid contacts: {}", e)))?;
            let document = state
                .repos
                .settings
                .update(|doc| {
                    doc.contacts = contacts;
                    doc.updated_at = Utc::now();
                })
                .await?;
            Ok(Json(serde_json::to_value(document).map_err(|e| {
                ApiError::Internal(format!("Serialization failed: {}", e))
            })?))
        }
        SettingsSection::Integrations => {
            let patch: UpdateIntegrationsRequest = serde_json::from_value(request.data)
                .map_err(|e| ApiError::Validation(format!("Invalid integrations: {}", e)))?;
            let settings = state
                .repos
                .integrations
                .update(|settings| {
                    patch.apply(settings);
                    settings.updated_at = Utc::now();
                })
                .await?;
            Ok(Json(serde_json::to_value(settings).map_err(|e| {
                ApiError::Internal(format!("Serialization failed: {}", e))
            })?))
        }
        SettingsSection::Homepage => {
            let patch: domain::models::homepage::UpdateHomepageRequest =
                serde_json::from_value(request.data)
                    .map_err(|e| ApiError::Validation(format!("Invalid homepage: {}", e)))?;
            let homepage = state
                .repos
                .homepage
                .update(|homepage| {
                    patch.apply(homepage);
                    homepage.updated_at = Utc::now();
                })
                .await?;
            Ok(Json(serde_json::to_value(homepage).map_err(|e| {
                ApiError::Internal(format!("Serialization failed: {}", e))
            })?))
        }
    }
}
