//! Blog post endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use domain::models::post::{CreatePostRequest, Post, UpdatePostRequest};

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::service_pages::ListQuery;

/// List visible, non-removed posts.
///
/// GET /api/posts
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.repos.posts.list(false).await)
}

/// GET /api/posts/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.repos.posts.get(id).await?))
}

/// GET /api/admin/posts?includeHidden=<bool>
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Post>> {
    Json(state.repos.posts.list(query.include_hidden).await)
}

/// POST /api/admin/posts
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    request.validate()?;
    let post = state.repos.posts.create(request.into_post()).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/posts/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    request.validate()?;
    Ok(Json(
        state.repos.posts.update(id, |post| request.apply(post)).await?,
    ))
}

/// POST /api/admin/posts/:id/toggle-visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.repos.posts.toggle_visibility(id).await?))
}

/// DELETE /api/admin/posts/:id (soft delete)
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.repos.posts.soft_remove(id).await?))
}

/// POST /api/admin/posts/:id/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.repos.posts.restore(id).await?))
}
