//! Authentication middleware.
//!
//! Admin routes require a bearer token issued by the login endpoint.
//! Only the token's digest is compared server-side; see
//! [`crate::services::SessionStore`].

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Extracts the bearer token from an `Authorization` header value.
fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Middleware for admin-only routes.
///
/// Rejects requests without a live session token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            return ApiError::Unauthorized("Missing bearer token".into()).into_response();
        }
    };

    if !state.sessions.authorize(token).await {
        return ApiError::Unauthorized("Invalid or expired session".into()).into_response();
    }

    next.run(req).await
}
