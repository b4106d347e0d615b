//! Admin login and logout.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::password::verify_password;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub ok: bool,
}

/// Verify the admin password and issue a session token.
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let hash = &state.config.auth.admin_password_hash;
    let valid = verify_password(&request.password, hash)
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))?;

    if !valid {
        return Err(ApiError::Unauthorized("Invalid password".into()));
    }

    let session = state.sessions.issue().await;
    tracing::info!("Admin session issued");

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    }))
}

/// Revoke the presented session token.
///
/// POST /api/auth/logout
///
/// Revoking an unknown token is still a successful logout.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    if let Some(token) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        state.sessions.revoke(token).await;
    }

    Json(LogoutResponse { ok: true })
}
