//! Review endpoint handlers.
//!
//! Public submissions land as pending; the public listing only ever
//! shows approved reviews. Moderation is an admin concern.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use domain::models::review::{
    Review, ReviewStatus, SubmitReviewRequest, UpdateReviewStatusRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// List approved reviews.
///
/// GET /api/reviews
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.repos.reviews.list(Some(ReviewStatus::Approved)).await)
}

/// Submit a review for moderation.
///
/// POST /api/reviews
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    request.validate()?;
    let review = state.repos.reviews.create(request.into_review()).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Query parameters for the admin review listing.
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    pub status: Option<String>,
}

/// List reviews for moderation, optionally filtered by status.
///
/// GET /api/admin/reviews?status=<pending|approved|rejected>
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            ReviewStatus::parse(raw)
                .ok_or_else(|| ApiError::Validation(format!("Unknown status: {}", raw)))?,
        ),
        None => None,
    };

    Ok(Json(state.repos.reviews.list(status).await))
}

/// Apply a moderation decision.
///
/// PUT /api/admin/reviews/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateReviewStatusRequest>,
) -> Result<Json<Review>, ApiError> {
    Ok(Json(
        state.repos.reviews.update_status(id, request.status).await?,
    ))
}

/// DELETE /api/admin/reviews/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.repos.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
