//! Service page endpoint handlers.
//!
//! Service pages follow the uniform CMS lifecycle: visibility toggle
//! and soft-delete are independent, and public listings exclude both
//! hidden and removed pages.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use domain::models::service_page::{
    CreateServicePageRequest, ServicePage, UpdateServicePageRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the admin listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_include_hidden")]
    pub include_hidden: bool,
}

fn default_include_hidden() -> bool {
    true
}

/// List visible, non-removed pages.
///
/// GET /api/service-pages
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<ServicePage>> {
    Json(state.repos.service_pages.list(false).await)
}

/// GET /api/service-pages/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServicePage>, ApiError> {
    Ok(Json(state.repos.service_pages.get(id).await?))
}

/// GET /api/admin/service-pages?includeHidden=<bool>
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ServicePage>> {
    Json(state.repos.service_pages.list(query.include_hidden).await)
}

/// POST /api/admin/service-pages
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateServicePageRequest>,
) -> Result<(StatusCode, Json<ServicePage>), ApiError> {
    request.validate()?;
    let page = state.repos.service_pages.create(request.into_page()).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// PUT /api/admin/service-pages/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateServicePageRequest>,
) -> Result<Json<ServicePage>, ApiError> {
    request.validate()?;
    Ok(Json(
        state
            .repos
            .service_pages
            .update(id, |page| request.apply(page))
            .await?,
    ))
}

/// POST /api/admin/service-pages/:id/toggle-visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServicePage>, ApiError> {
    Ok(Json(state.repos.service_pages.toggle_visibility(id).await?))
}

/// DELETE /api/admin/service-pages/:id
///
/// Soft delete: the page stays retrievable by id and can be restored.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServicePage>, ApiError> {
    Ok(Json(state.repos.service_pages.soft_remove(id).await?))
}

/// POST /api/admin/service-pages/:id/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServicePage>, ApiError> {
    Ok(Json(state.repos.service_pages.restore(id).await?))
}
