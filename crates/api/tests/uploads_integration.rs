//! Image upload endpoint.

mod common;

use axum::http::StatusCode;
use base64::Engine;
use serde_json::json;

use common::{get, get_auth, login, post_json_auth, send, spawn_app};

fn data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[tokio::test]
async fn test_upload_registers_and_serves_the_file() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, image) = send(
        &app.router,
        post_json_auth(
            "/api/admin/uploads",
            &json!({ "file": data_url(b"fake png bytes"), "filename": "rose.png" }),
            &token,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(image["size"], 14);
    let url = image["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with("rose.png"));

    // The file is served statically.
    let response = {
        use tower::ServiceExt;
        app.router
            .clone()
            .oneshot(get(url))
            .await
            .expect("Request failed")
    };
    assert_eq!(response.status(), StatusCode::OK);

    // And registered in the admin listing.
    let (_, uploads) = send(&app.router, get_auth("/api/admin/uploads", &token)).await;
    assert_eq!(uploads.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_bare_base64_payload_is_accepted() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let payload = base64::engine::general_purpose::STANDARD.encode(b"bytes");
    let (status, _) = send(
        &app.router,
        post_json_auth(
            "/api/admin/uploads",
            &json!({ "file": payload, "filename": "bare.png" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    // Test config caps uploads at 1 MiB.
    let oversized = vec![0u8; 1024 * 1024 + 1];
    let (status, body) = send(
        &app.router,
        post_json_auth(
            "/api/admin/uploads",
            &json!({ "file": data_url(&oversized), "filename": "huge.png" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_invalid_base64_is_rejected() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, _) = send(
        &app.router,
        post_json_auth(
            "/api/admin/uploads",
            &json!({ "file": "data:image/png;base64,not@valid!", "filename": "bad.png" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
