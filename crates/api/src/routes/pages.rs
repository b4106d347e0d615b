//! Singleton page endpoint handlers: contact page and homepage.
//!
//! Each has exactly one logical record; updates are merges that refresh
//! the `updated_at` stamp.

use axum::{extract::State, Json};
use chrono::Utc;

use domain::models::contact_page::{ContactPage, UpdateContactPageRequest};
use domain::models::homepage::{Homepage, UpdateHomepageRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/pages/contact
pub async fn get_contact(State(state): State<AppState>) -> Json<ContactPage> {
    Json(state.repos.contact_page.get().await)
}

/// PUT /api/admin/pages/contact
pub async fn update_contact(
    State(state): State<AppState>,
    Json(request): Json<UpdateContactPageRequest>,
) -> Result<Json<ContactPage>, ApiError> {
    let page = state
        .repos
        .contact_page
        .update(|page| {
            request.apply(page);
            page.updated_at = Utc::now();
        })
        .await?;
    Ok(Json(page))
}

/// GET /api/pages/home
pub async fn get_homepage(State(state): State<AppState>) -> Json<Homepage> {
    Json(state.repos.homepage.get().await)
}

/// PUT /api/admin/pages/home
pub async fn update_homepage(
    State(state): State<AppState>,
    Json(request): Json<UpdateHomepageRequest>,
) -> Result<Json<Homepage>, ApiError> {
    let homepage = state
        .repos
        .homepage
        .update(|homepage| {
            request.apply(homepage);
            homepage.updated_at = Utc::now();
        })
        .await?;
    Ok(Json(homepage))
}
