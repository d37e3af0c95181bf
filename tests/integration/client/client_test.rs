//! `EditorClient` against a mock session API

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use superior_editor::egui_app::ClientError;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::mock_server::*;
use crate::common::*;

#[tokio::test]
async fn test_fetch_snapshot() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(member_snapshot().view()))
        .expect(1)
        .mount(&mock)
        .await;

    let snapshot = client_for(&mock.uri()).fetch_snapshot(EDITOR_ID).await.unwrap();
    assert_eq!(snapshot, member_snapshot().view());
}

#[tokio::test]
async fn test_fetch_not_found_carries_server_message() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(error_body("Session not found - please upload data file", 404))
        .mount(&mock)
        .await;

    let error = client_for(&mock.uri()).fetch_snapshot(EDITOR_ID).await.unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Session not found - please upload data file");
}

#[tokio::test]
async fn test_upload_wraps_snapshot_in_data() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .and(body_partial_json(json!({ "data": { "serverUuid": SERVER_UUID } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Data uploaded successfully"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let response = client_for(&mock.uri())
        .upload_snapshot(EDITOR_ID, &member_snapshot())
        .await
        .unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_submit_sends_wire_names() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .and(body_json(json!({
            "rankChanges": [{ "action": "delete", "rankId": "member" }],
            "tagChanges": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "version": 3,
            "downloadUrl": "/api/editor/abc123/download"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let response = client_for(&mock.uri())
        .submit_changes(EDITOR_ID, &delete_member())
        .await
        .unwrap();
    assert_eq!(response.version, 3);
}

#[tokio::test]
async fn test_rejected_status() {
    let mock = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(SESSION_PATH))
        .respond_with(error_body("Internal server error", 500))
        .mount(&mock)
        .await;

    let error = client_for(&mock.uri()).retrieve_changes(EDITOR_ID).await.unwrap_err();
    assert_eq!(
        error,
        ClientError::Rejected {
            status: 500,
            message: "Internal server error".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_json_error_body() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/editor/abc123/download"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock)
        .await;

    let error = client_for(&mock.uri()).download_changes(EDITOR_ID).await.unwrap_err();
    assert_matches!(error, ClientError::Rejected { status: 502, ref message } if message == "bad gateway");
}

#[tokio::test]
async fn test_unexpected_success_body() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock)
        .await;

    let error = client_for(&mock.uri()).fetch_snapshot(EDITOR_ID).await.unwrap_err();
    assert_matches!(error, ClientError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server() {
    // Bind and drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let error = client_for(&format!("http://127.0.0.1:{}", port))
        .fetch_snapshot(EDITOR_ID)
        .await
        .unwrap_err();
    assert_matches!(error, ClientError::Network(_));
}
