//! Integration tests for API endpoints.
//!
//! These tests drive the router directly against a real in-memory store,
//! without binding a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_service_lib::api::{create_router, AppState};
use user_service_lib::repository::UserStore;

// =============================================================================
// Helpers
// =============================================================================

fn test_app() -> Router {
    create_router(AppState::from_store(Arc::new(UserStore::new())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    create(&app, "Test User", "test@example.com").await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["users"], 1);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user() {
    let app = test_app();

    let body = create(&app, "Test User", "test@example.com").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["email"], "test@example.com");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_user_missing_name() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "", "email": "test@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Name cannot be empty");
}

#[tokio::test]
async fn test_empty_and_blank_name_report_same_message() {
    let app = test_app();

    let (_, empty) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "", "email": "test@example.com" })),
    )
    .await;
    let (_, blank) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "   ", "email": "test@example.com" })),
    )
    .await;

    assert_eq!(empty["error"]["message"], blank["error"]["message"]);
}

#[tokio::test]
async fn test_create_user_reports_every_missing_field() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "", "email": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Email cannot be empty, Name cannot be empty"
    );
}

#[tokio::test]
async fn test_create_user_blank_email() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Jane", "email": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/users", Some(json!({ "name": "Jane" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_users() {
    let app = test_app();
    create(&app, "User1", "user1@example.com").await;
    create(&app, "User2", "user2@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    let mut ids: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_get_user() {
    let app = test_app();
    create(&app, "Jane", "jane@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_malformed_id() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_user_lifecycle() {
    let app = test_app();
    create(&app, "Jane", "jane@example.com").await;

    let (status, _) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_count_users() {
    let app = test_app();
    create(&app, "A", "a@example.com").await;
    create(&app, "B", "b@example.com").await;
    create(&app, "C", "c@example.com").await;
    send(&app, Method::DELETE, "/api/users/2", None).await;

    let (status, body) = send(&app, Method::GET, "/api/users/count", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_ids_not_reused_over_http() {
    let app = test_app();
    create(&app, "A", "a@example.com").await;
    send(&app, Method::DELETE, "/api/users/1", None).await;

    let body = create(&app, "B", "b@example.com").await;

    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/users"].is_object());
    assert!(body["paths"]["/api/users/{id}"].is_object());
    assert!(body["components"]["schemas"]["User"]["properties"]["created_at"].is_object());
    assert_eq!(
        body["components"]["schemas"]["CreateUserRequest"]["properties"]["name"]["example"],
        "Jane Doe"
    );
}
