//! Catalog endpoint handlers.
//!
//! The public surface lists visible categories only; the admin surface
//! sees everything and owns all mutations, including the two reorder
//! operations that work on one visibility partition at a time.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use domain::models::catalog::{
    AddServiceRequest, CatalogService, CreateCategoryRequest, ReorderCategoriesRequest,
    ReorderServicesRequest, ServiceCategory, UpdateCategoryRequest, UpdateServiceRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// List visible categories in display order.
///
/// GET /api/catalog
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<ServiceCategory>> {
    Json(state.repos.catalog.list(false).await)
}

/// Fetch one category by slug, hidden included.
///
/// GET /api/catalog/:slug
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceCategory>, ApiError> {
    Ok(Json(state.repos.catalog.get(&slug).await?))
}

/// List all categories for the admin panel.
///
/// GET /api/admin/catalog
pub async fn list_admin(State(state): State<AppState>) -> Json<Vec<ServiceCategory>> {
    Json(state.repos.catalog.list(true).await)
}

/// Create a category.
///
/// POST /api/admin/catalog
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ServiceCategory>), ApiError> {
    request.validate()?;
    let category = state.repos.catalog.add_category(request.into()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Patch category fields.
///
/// PUT /api/admin/catalog/:slug
pub async fn update_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<ServiceCategory>, ApiError> {
    request.validate()?;
    Ok(Json(
        state.repos.catalog.update_category(&slug, &request).await?,
    ))
}

/// Delete a category and its services.
///
/// DELETE /api/admin/catalog/:slug
pub async fn delete_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.catalog.delete_category(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a category's visibility flag.
///
/// POST /api/admin/catalog/:slug/toggle-visibility
pub async fn toggle_category_visibility(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceCategory>, ApiError> {
    Ok(Json(
        state.repos.catalog.toggle_category_visibility(&slug).await?,
    ))
}

/// Reorder one visibility partition of the catalog.
///
/// POST /api/admin/catalog/reorder
pub async fn reorder_categories(
    State(state): State<AppState>,
    Json(request): Json<ReorderCategoriesRequest>,
) -> Result<Json<Vec<ServiceCategory>>, ApiError> {
    Ok(Json(
        state
            .repos
            .catalog
            .reorder_categories(&request.slugs, request.visible)
            .await?,
    ))
}

/// Add a service to a category.
///
/// POST /api/admin/catalog/:slug/services
pub async fn add_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<AddServiceRequest>,
) -> Result<(StatusCode, Json<CatalogService>), ApiError> {
    request.validate()?;
    let service = state.repos.catalog.add_service(&slug, request.into()).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Patch service fields.
///
/// PUT /api/admin/catalog/:slug/services/:service_id
pub async fn update_service(
    State(state): State<AppState>,
    Path((slug, service_id)): Path<(String, String)>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<CatalogService>, ApiError> {
    request.validate()?;
    Ok(Json(
        state
            .repos
            .catalog
            .update_service(&slug, &service_id, &request)
            .await?,
    ))
}

/// Delete a service.
///
/// DELETE /api/admin/catalog/:slug/services/:service_id
pub async fn delete_service(
    State(state): State<AppState>,
    Path((slug, service_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.repos.catalog.delete_service(&slug, &service_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reorder services within a category.
///
/// POST /api/admin/catalog/:slug/services/reorder
pub async fn reorder_services(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<ReorderServicesRequest>,
) -> Result<Json<ServiceCategory>, ApiError> {
    Ok(Json(
        state
            .repos
            .catalog
            .reorder_services(&slug, &request.ids)
            .await?,
    ))
}
