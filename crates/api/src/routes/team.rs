//! Team member endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use domain::models::team_member::{
    CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::service_pages::ListQuery;

/// List visible, non-removed team members.
///
/// GET /api/team
pub async fn list_public(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.repos.team.list(false).await)
}

/// GET /api/admin/team?includeHidden=<bool>
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<TeamMember>> {
    Json(state.repos.team.list(query.include_hidden).await)
}

/// GET /api/admin/team/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.repos.team.get(id).await?))
}

/// POST /api/admin/team
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    request.validate()?;
    let member = state.repos.team.create(request.into_member()).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/admin/team/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTeamMemberRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    request.validate()?;
    Ok(Json(
        state
            .repos
            .team
            .update(id, |member| request.apply(member))
            .await?,
    ))
}

/// POST /api/admin/team/:id/toggle-visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.repos.team.toggle_visibility(id).await?))
}

/// DELETE /api/admin/team/:id (soft delete)
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.repos.team.soft_remove(id).await?))
}

/// POST /api/admin/team/:id/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.repos.team.restore(id).await?))
}
