//! Common test utilities for integration tests.
//!
//! Builds the full application over in-memory storage so tests exercise
//! the real router, middleware and repositories without touching disk
//! (except for uploads, which get a temporary directory).

// Helper utilities intentionally available to all integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use garden_api::app::{create_app, AppState};
use garden_api::config::{
    AuthConfig, Config, LoggingConfig, NotificationsConfig, SecurityConfig, ServerConfig,
    StorageConfig,
};
use persistence::{MemoryStorage, Repositories, Storage};

/// The admin password every test app accepts.
pub const TEST_PASSWORD: &str = "garden-admin-test";

pub struct TestApp {
    pub router: Router,
    // Keeps the uploads directory alive for the test's duration.
    _uploads_dir: TempDir,
}

fn test_config(uploads_dir: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            max_body_size: 10_485_760,
            cart_idle_ttl_secs: 86_400,
        },
        storage: StorageConfig {
            data_dir: PathBuf::from("unused-in-tests"),
            uploads_dir,
            max_upload_bytes: 1024 * 1024,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
        auth: AuthConfig {
            admin_password_hash: shared::password::hash_password(TEST_PASSWORD)
                .expect("Failed to hash test password"),
            session_ttl_secs: 3600,
        },
        notifications: NotificationsConfig::default(),
    }
}

/// Builds a full application over fresh in-memory storage.
pub async fn spawn_app() -> TestApp {
    let uploads_dir = TempDir::new().expect("Failed to create uploads dir");
    let config = test_config(uploads_dir.path().to_path_buf());

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let repos = Repositories::load(storage.clone())
        .await
        .expect("Failed to load repositories");

    let state = AppState::new(config, storage, repos);

    TestApp {
        router: create_app(state),
        _uploads_dir: uploads_dir,
    }
}

/// Sends a request and returns the status plus parsed JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get_auth(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_auth(path: &str, body: &Value, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_auth(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn put_json(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn put_json_auth(path: &str, body: &Value, token: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_auth(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Logs in with the test password and returns the session token.
pub async fn login(router: &Router) -> String {
    let (status, body) = send(
        router,
        post_json(
            "/api/auth/login",
            &serde_json::json!({ "password": TEST_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().expect("token missing").to_string()
}
