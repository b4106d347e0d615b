//! Settings document and singleton pages.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, get_auth, login, post_json_auth, put_json_auth, send, spawn_app};

#[tokio::test]
async fn test_settings_document_shape() {
    let app = spawn_app().await;

    let (status, settings) = send(&app.router, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(settings.get("siteSettings").is_some());
    assert!(settings.get("contacts").is_some());
}

#[tokio::test]
async fn test_update_site_settings_section() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, updated) = send(
        &app.router,
        post_json_auth(
            "/api/admin/settings",
            &json!({
                "section": "siteSettings",
                "data": { "siteName": "Garden Platform", "metaTitle": "Gardens done right" },
            }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["siteSettings"]["siteName"], "Garden Platform");

    let (_, settings) = send(&app.router, get("/api/settings")).await;
    assert_eq!(settings["siteSettings"]["metaTitle"], "Gardens done right");
}

#[tokio::test]
async fn test_update_contacts_section() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, _) = send(
        &app.router,
        post_json_auth(
            "/api/admin/settings",
            &json!({
                "section": "contacts",
                "data": { "phone": "+7 900 111-22-33", "email": "hello@garden.example" },
            }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, settings) = send(&app.router, get("/api/settings")).await;
    assert_eq!(settings["contacts"]["phone"], "+7 900 111-22-33");
}

#[tokio::test]
async fn test_homepage_section_routes_to_homepage_document() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, homepage) = send(
        &app.router,
        post_json_auth(
            "/api/admin/settings",
            &json!({
                "section": "homepage",
                "data": { "heroTitle": "Your garden, our care" },
            }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(homepage["heroTitle"], "Your garden, our care");

    let (_, page) = send(&app.router, get("/api/pages/home")).await;
    assert_eq!(page["heroTitle"], "Your garden, our care");
}

#[tokio::test]
async fn test_integration_settings_roundtrip() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, saved) = send(
        &app.router,
        put_json_auth(
            "/api/admin/settings/integrations",
            &json!({
                "telegramEnabled": true,
                "telegramBotToken": "123456:bot-token",
                "telegramChatIds": ["-100200300"],
            }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["telegramEnabled"], true);

    let (status, settings) = send(
        &app.router,
        get_auth("/api/admin/settings/integrations", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["telegramBotToken"], "123456:bot-token");
    assert_eq!(settings["telegramChatIds"][0], "-100200300");
}

#[tokio::test]
async fn test_integrations_section_routes_to_integrations_document() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, saved) = send(
        &app.router,
        post_json_auth(
            "/api/admin/settings",
            &json!({
                "section": "integrations",
                "data": { "telegramEnabled": true, "telegramBotToken": "123456:bot-token" },
            }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["telegramBotToken"], "123456:bot-token");

    let (_, settings) = send(
        &app.router,
        get_auth("/api/admin/settings/integrations", &token),
    )
    .await;
    assert_eq!(settings["telegramEnabled"], true);
}

#[tokio::test]
async fn test_public_settings_never_carry_integrations() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    send(
        &app.router,
        put_json_auth(
            "/api/admin/settings/integrations",
            &json!({ "telegramEnabled": true, "telegramBotToken": "123456:bot-token" }),
            &token,
        ),
    )
    .await;

    let (status, settings) = send(&app.router, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(settings.get("integrations").is_none());
    assert!(settings.get("telegramBotToken").is_none());
}

#[tokio::test]
async fn test_integration_settings_require_a_session() {
    let app = spawn_app().await;

    let (status, _) = send(&app.router, get("/api/admin/settings/integrations")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_section_is_rejected() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, _) = send(
        &app.router,
        post_json_auth(
            "/api/admin/settings",
            &json!({ "section": "branding", "data": {} }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_page_update_is_a_merge() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, _) = send(
        &app.router,
        put_json_auth(
            "/api/admin/pages/contact",
            &json!({ "address": "Green lane 5" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, updated) = send(
        &app.router,
        put_json_auth(
            "/api/admin/pages/contact",
            &json!({ "mapEmbed": "<iframe/>" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // The earlier field survives the second merge.
    assert_eq!(updated["address"], "Green lane 5");

    let (_, page) = send(&app.router, get("/api/pages/contact")).await;
    assert_eq!(page["address"], "Green lane 5");
}
