//! Admin authentication flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get_auth, login, post_auth, post_json, send, spawn_app};

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app.router,
        post_json("/api/auth/login", &json!({ "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_admin_routes_reject_missing_token() {
    let app = spawn_app().await;

    let (status, _) = send(&app.router, common::get("/api/admin/orders")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_reject_forged_token() {
    let app = spawn_app().await;

    let (status, _) = send(&app.router, get_auth("/api/admin/orders", "gp_forged")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_authorizes_across_requests() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    for _ in 0..2 {
        let (status, _) = send(&app.router, get_auth("/api/admin/orders", &token)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, _) = send(&app.router, post_auth("/api/auth/logout", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app.router, get_auth("/api/admin/orders", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_response_carries_expiry() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app.router,
        post_json("/api/auth/login", &json!({ "password": common::TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().unwrap().starts_with("gp_"));
    assert!(body["expiresAt"].is_string());
}
