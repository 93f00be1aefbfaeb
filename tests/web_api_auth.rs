//! Web API account and session tests.
//!
//! Integration tests for registration, login, logout, and service status
//! endpoints.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderName;
use axum_test::TestServer;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use filedepot::auth::SessionManager;
use filedepot::file::BlobStore;
use filedepot::web::handlers::AppState;
use filedepot::web::router::create_router;
use filedepot::Database;

fn x_token() -> HeaderName {
    HeaderName::from_static("x-token")
}

/// Create a test server with an in-memory database and a temp blob root.
async fn create_test_server_with_ttl(ttl: Duration) -> (TestServer, tempfile::TempDir) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let blob_dir = tempfile::TempDir::new().expect("Failed to create blob dir");

    let sessions = Arc::new(SessionManager::with_ttl(ttl));
    let app_state = Arc::new(AppState::new(db, BlobStore::new(blob_dir.path()), sessions));

    let server = TestServer::new(create_router(app_state)).expect("Failed to create test server");
    (server, blob_dir)
}

async fn create_test_server() -> (TestServer, tempfile::TempDir) {
    create_test_server_with_ttl(Duration::from_secs(86400)).await
}

fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

/// Register a user and exchange credentials for a session token.
async fn register_and_connect(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/users")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .get("/connect")
        .add_header(AUTHORIZATION, basic_auth(email, password))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_status() {
    let (server, _blobs) = create_test_server().await;

    let response = server.get("/status").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "db": true, "sessions": true }));
}

#[tokio::test]
async fn test_stats_counts_users_and_files() {
    let (server, _blobs) = create_test_server().await;

    let response = server.get("/stats").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "users": 0, "files": 0 }));

    let token = register_and_connect(&server, "alice@example.com", "pw123").await;
    server
        .post("/files")
        .add_header(x_token(), token)
        .json(&json!({ "name": "docs", "type": "folder" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/stats").await;
    response.assert_json(&json!({ "users": 1, "files": 1 }));
}

#[tokio::test]
async fn test_register_user() {
    let (server, _blobs) = create_test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "alice@example.com", "password": "pw123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    // The digest must never appear in the response
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (server, _blobs) = create_test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "password": "pw123" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing email" }));

    let response = server
        .post("/users")
        .json(&json!({ "email": "alice@example.com" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing password" }));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (server, _blobs) = create_test_server().await;

    let body = json!({ "email": "alice@example.com", "password": "pw123" });
    server.post("/users").json(&body).await.assert_status(axum::http::StatusCode::CREATED);

    let response = server.post("/users").json(&body).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Already exist" }));
}

#[tokio::test]
async fn test_connect_returns_token() {
    let (server, _blobs) = create_test_server().await;

    let token = register_and_connect(&server, "alice@example.com", "pw123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_connect_wrong_password() {
    let (server, _blobs) = create_test_server().await;

    register_and_connect(&server, "alice@example.com", "pw123").await;

    let response = server
        .get("/connect")
        .add_header(AUTHORIZATION, basic_auth("alice@example.com", "wrong"))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_connect_unknown_email() {
    let (server, _blobs) = create_test_server().await;

    let response = server
        .get("/connect")
        .add_header(AUTHORIZATION, basic_auth("nobody@example.com", "pw123"))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_connect_without_credentials() {
    let (server, _blobs) = create_test_server().await;

    let response = server.get("/connect").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_connect_issues_fresh_tokens() {
    let (server, _blobs) = create_test_server().await;

    let first = register_and_connect(&server, "alice@example.com", "pw123").await;

    let response = server
        .get("/connect")
        .add_header(AUTHORIZATION, basic_auth("alice@example.com", "pw123"))
        .await;
    response.assert_status_ok();
    let second = response.json::<Value>()["token"].as_str().unwrap().to_string();

    assert_ne!(first, second);

    // Both sessions stay live
    for token in [first, second] {
        server
            .get("/users/me")
            .add_header(x_token(), token)
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_users_me() {
    let (server, _blobs) = create_test_server().await;

    let token = register_and_connect(&server, "alice@example.com", "pw123").await;

    let response = server.get("/users/me").add_header(x_token(), token).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_users_me_requires_token() {
    let (server, _blobs) = create_test_server().await;

    let response = server.get("/users/me").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Unauthorized" }));

    let response = server
        .get("/users/me")
        .add_header(x_token(), "bogus-token")
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_disconnect_revokes_token() {
    let (server, _blobs) = create_test_server().await;

    let token = register_and_connect(&server, "alice@example.com", "pw123").await;

    let response = server
        .get("/disconnect")
        .add_header(x_token(), token.clone())
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // The token is dead from here on
    server
        .get("/users/me")
        .add_header(x_token(), token.clone())
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);
    server
        .get("/disconnect")
        .add_header(x_token(), token)
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_expires() {
    let (server, _blobs) = create_test_server_with_ttl(Duration::from_millis(50)).await;

    let token = register_and_connect(&server, "alice@example.com", "pw123").await;

    tokio::time::sleep(Duration::from_millis(100)).await;

    server
        .get("/users/me")
        .add_header(x_token(), token)
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);
}
