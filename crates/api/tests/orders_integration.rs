//! Cart and order submission flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete_auth, get, get_auth, login, post_json, put_json_auth, send, spawn_app};

async fn new_cart(app: &common::TestApp) -> String {
    let (status, body) = send(
        &app.router,
        common::post_json("/api/carts", &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn add_item(app: &common::TestApp, cart_id: &str, id: &str, price: f64) {
    let (status, _) = send(
        &app.router,
        post_json(
            &format!("/api/carts/{}/items", cart_id),
            &json!({
                "serviceId": id,
                "category": "Tree care",
                "name": format!("Service {}", id),
                "price": price,
                "unit": "tree",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_cart_has_zero_totals() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    let (_, cart) = send(&app.router, get(&format!("/api/carts/{}", cart_id))).await;
    assert_eq!(cart["subtotal"], 0.0);
    assert_eq!(cart["total"], 0.0);
}

#[tokio::test]
async fn test_duplicate_add_keeps_one_entry() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    add_item(&app, &cart_id, "gc1", 1500.0).await;
    add_item(&app, &cart_id, "gc1", 1500.0).await;

    let (_, cart) = send(&app.router, get(&format!("/api/carts/{}", cart_id))).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_quantity_drives_total_but_not_subtotal() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add_item(&app, &cart_id, "gc1", 1500.0).await;

    let (status, cart) = send(
        &app.router,
        common::put_json(
            &format!("/api/carts/{}/items/gc1", cart_id),
            &json!({ "quantity": 3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["subtotal"], 1500.0);
    assert_eq!(cart["total"], 4500.0);
}

#[tokio::test]
async fn test_submit_computes_total_from_line_totals() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add_item(&app, &cart_id, "gc1", 1500.0).await;
    add_item(&app, &cart_id, "gc2", 2000.0).await;

    let (status, order) = send(
        &app.router,
        post_json(
            "/api/orders",
            &json!({
                "cartId": cart_id,
                "name": "Ivan",
                "address": "Garden street 1",
                "phone": "+7 900 000-00-00",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["totalPrice"], 3500.0);
    assert_eq!(order["status"], "new");
    assert!(order["number"].as_str().unwrap().starts_with("ORD-"));

    // Submission retires the cart entirely.
    let (status, _) = send(&app.router, get(&format!("/api/carts/{}", cart_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submitting_empty_cart_is_rejected() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    let (status, _) = send(
        &app.router,
        post_json(
            "/api/orders",
            &json!({
                "cartId": cart_id,
                "name": "Ivan",
                "address": "Garden street 1",
                "phone": "+7 900 000-00-00",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submitting_unknown_cart_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app.router,
        post_json(
            "/api/orders",
            &json!({
                "cartId": "5f64a1c2-0000-0000-0000-000000000000",
                "name": "Ivan",
                "address": "Garden street 1",
                "phone": "+7 900 000-00-00",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_ledger_lists_newest_first_and_moderates_status() {
    let app = spawn_app().await;
    let token = login(&app.router).await;

    for price in [100.0, 200.0] {
        let cart_id = new_cart(&app).await;
        add_item(&app, &cart_id, "gc1", price).await;
        let (status, _) = send(
            &app.router,
            post_json(
                "/api/orders",
                &json!({
                    "cartId": cart_id,
                    "name": "Ivan",
                    "address": "Garden street 1",
                    "phone": "+7 900 000-00-00",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, orders) = send(&app.router, get_auth("/api/admin/orders", &token)).await;
    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap().clone();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["totalPrice"], 200.0);

    let id = orders[1]["id"].as_str().unwrap().to_string();
    let (status, updated) = send(
        &app.router,
        put_json_auth(
            &format!("/api/admin/orders/{}/status", id),
            &json!({ "status": "completed" }),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    // Status filter sees exactly the completed one.
    let (_, completed) = send(
        &app.router,
        get_auth("/api/admin/orders?status=completed", &token),
    )
    .await;
    assert_eq!(completed.as_array().unwrap().len(), 1);

    // Hard delete.
    let (status, _) = send(&app.router, delete_auth(&format!("/api/admin/orders/{}", id), &token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app.router, get_auth(&format!("/api/admin/orders/{}", id), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
