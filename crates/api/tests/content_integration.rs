//! CMS content lifecycle: visibility, soft delete, restore.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete_auth, get, get_auth, login, post_auth, post_json_auth, put_json_auth, send, spawn_app};

async fn create_page(app: &common::TestApp, token: &str, slug: &str) -> i64 {
    let (status, page) = send(
        &app.router,
        post_json_auth(
            "/api/admin/service-pages",
            &json!({
                "title": format!("Page {}", slug),
                "slug": slug,
                "price": 2500.0,
                "unit": "plot",
            }),
            token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    page["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let id = create_page(&app, &token, "garden-design").await;
    assert!(id >= 1);

    let (status, page) = send(&app.router, get(&format!("/api/service-pages/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["slug"], "garden-design");
    assert_eq!(page["visible"], true);
    assert!(page["createdAt"].is_string());
}

#[tokio::test]
async fn test_update_merges_and_refreshes_updated_at() {
    let app = spawn_app().await;
    let token = login(&app.router).await;
    let id = create_page(&app, &token, "garden-design").await;

    let (status, updated) = send(
        &app.router,
        put_json_auth(
            &format!("/api/admin/service-pages/{}", id),
            &json!({ "price": 3000.0 }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 3000.0);
    // Untouched fields survive the merge.
    assert_eq!(updated["slug"], "garden-design");
    assert_ne!(updated["updatedAt"], updated["createdAt"]);
}

#[tokio::test]
async fn test_soft_remove_then_restore_preserves_visibility() {
    let app = spawn_app().await;
    let token = login(&app.router).await;
    let id = create_page(&app, &token, "garden-design").await;

    // Hide, then remove: the page must restore as hidden.
    let (_, hidden) = send(
        &app.router,
        post_auth(
            &format!("/api/admin/service-pages/{}/toggle-visibility", id),
            &token,
        ),
    )
    .await;
    assert_eq!(hidden["visible"], false);

    let (status, removed) = send(
        &app.router,
        delete_auth(&format!("/api/admin/service-pages/{}", id), &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(removed["removedAt"].is_string());

    let (status, restored) = send(
        &app.router,
        post_auth(&format!("/api/admin/service-pages/{}/restore", id), &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(restored["removedAt"].is_null());
    assert_eq!(restored["visible"], false);
}

#[tokio::test]
async fn test_public_listing_excludes_hidden_and_removed() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let listed = create_page(&app, &token, "listed").await;
    let hidden = create_page(&app, &token, "hidden").await;
    let removed = create_page(&app, &token, "removed").await;

    send(
        &app.router,
        post_auth(
            &format!("/api/admin/service-pages/{}/toggle-visibility", hidden),
            &token,
        ),
    )
    .await;
    send(
        &app.router,
        delete_auth(&format!("/api/admin/service-pages/{}", removed), &token),
    )
    .await;

    let (_, public) = send(&app.router, get("/api/service-pages")).await;
    let public = public.as_array().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["id"].as_i64().unwrap(), listed);

    let (_, admin) = send(&app.router, get_auth("/api/admin/service-pages", &token)).await;
    assert_eq!(admin.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_posts_and_team_follow_the_same_lifecycle() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    let (status, post) = send(
        &app.router,
        post_json_auth(
            "/api/admin/posts",
            &json!({ "title": "Autumn pruning", "slug": "autumn-pruning" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let post_id = post["id"].as_i64().unwrap();

    let (status, member) = send(
        &app.router,
        post_json_auth(
            "/api/admin/team",
            &json!({ "name": "Olga", "role": "Arborist" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let member_id = member["id"].as_i64().unwrap();

    // Soft-remove both; public listings become empty, admin still sees them.
    send(
        &app.router,
        delete_auth(&format!("/api/admin/posts/{}", post_id), &token),
    )
    .await;
    send(
        &app.router,
        delete_auth(&format!("/api/admin/team/{}", member_id), &token),
    )
    .await;

    let (_, posts) = send(&app.router, get("/api/posts")).await;
    assert!(posts.as_array().unwrap().is_empty());
    let (_, team) = send(&app.router, get("/api/team")).await;
    assert!(team.as_array().unwrap().is_empty());

    let (_, admin_posts) = send(&app.router, get_auth("/api/admin/posts", &token)).await;
    assert_eq!(admin_posts.as_array().unwrap().len(), 1);
    let (_, admin_team) = send(&app.router, get_auth("/api/admin/team", &token)).await;
    assert_eq!(admin_team.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_entity_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = send(&app.router, get("/api/service-pages/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app.router, get("/api/posts/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
