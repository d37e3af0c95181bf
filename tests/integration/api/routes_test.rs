//! Route table integration tests
//!
//! Method handling, the download attachment, health and the JSON error
//! contract for unknown paths and bad bodies.

use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use superior_editor::shared::ChangeSet;

use crate::common::server::*;
use crate::common::*;

#[tokio::test]
async fn test_unsupported_method() {
    let server = uploaded_server().await;

    let response = server.method(Method::PUT, SESSION).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Method not allowed", "status": 405 })
    );
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = uploaded_server().await;

    let response = server.post(SESSION).text("{not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    assert!(error.starts_with("Invalid request body"), "{}", error);
}

#[tokio::test]
async fn test_download_route() {
    let server = uploaded_server().await;
    server.post(SESSION).json(&create_vip()).await;

    let response = server.get("/api/editor/abc123/download").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"changes-abc123-v1.json\""
    );
    assert_eq!(response.header(header::CONTENT_TYPE), "application/json");
    assert_eq!(
        response.json::<ChangeSet>(),
        server.delete(SESSION).await.json::<ChangeSet>()
    );
}

#[tokio::test]
async fn test_download_without_changes() {
    let server = uploaded_server().await;

    let response = server.get("/api/editor/abc123/download").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.post("/api/editor/abc123/download").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let server = uploaded_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok", "sessions": 1 }));
}

#[tokio::test]
async fn test_unknown_path() {
    let server = create_test_server();

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["status"], 404);
}
