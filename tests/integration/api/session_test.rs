//! Session API integration tests
//!
//! Drives the real router through `axum-test`, covering the upload / fetch /
//! submit / retrieve cycle.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use superior_editor::shared::{ChangeAction, ChangeSet, SnapshotView, SubmitResponse};

use crate::common::server::*;
use crate::common::*;

#[tokio::test]
async fn test_upload_then_fetch() {
    let server = create_test_server();

    let response = server.post(SESSION).json(&upload_body()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": true, "message": "Data uploaded successfully" })
    );

    let response = server.get(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<SnapshotView>(), member_snapshot().view());

    // serverUuid is kept for change-sets, not served to the editor
    assert!(response.json::<Value>().get("serverUuid").is_none());
}

#[tokio::test]
async fn test_fetch_returns_unknown_fields() {
    let server = create_test_server();
    let data = json!({
        "ranks": [{ "id": "member", "name": "Member", "displayColor": "gray" }],
        "tags": [{ "id": "og", "displayName": "OG", "icon": "STAR" }],
        "lastUpdated": "2024-01-01T00:00:00Z",
        "version": 7,
        "motd": "Welcome",
        "serverUuid": SERVER_UUID
    });

    let response = server.post(SESSION).json(&json!({ "data": data })).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched = server.get(SESSION).await.json::<Value>();
    assert_eq!(fetched["ranks"][0]["displayColor"], "gray");
    assert_eq!(fetched["tags"][0]["icon"], "STAR");
    assert_eq!(fetched["lastUpdated"], "2024-01-01T00:00:00Z");
    assert_eq!(fetched["version"], 7);
    assert_eq!(fetched["motd"], "Welcome");
}

#[tokio::test]
async fn test_upload_with_null_lists() {
    let server = create_test_server();

    let response = server
        .post(SESSION)
        .json(&json!({ "data": { "ranks": null, "tags": null, "serverUuid": SERVER_UUID } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched = server.get(SESSION).await.json::<SnapshotView>();
    assert!(fetched.ranks.is_empty());
    assert!(fetched.tags.is_empty());
}

#[tokio::test]
async fn test_fetch_before_upload_is_not_found() {
    let server = create_test_server();

    let response = server.get(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Session not found - please upload data file", "status": 404 })
    );
}

#[tokio::test]
async fn test_create_rank_scenario() {
    let server = uploaded_server().await;

    let response = server.post(SESSION).json(&create_vip()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let submitted = response.json::<SubmitResponse>();
    assert!(submitted.success);
    assert_eq!(submitted.version, 1);
    assert_eq!(submitted.download_url, "/api/editor/abc123/download");

    let response = server.delete(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let changes = response.json::<ChangeSet>();
    assert_eq!(changes.editor_id, EDITOR_ID);
    assert_eq!(changes.server_uuid.as_deref(), Some(SERVER_UUID));
    assert_eq!(changes.version, 1);
    assert_eq!(changes.rank_changes.len(), 1);
    assert_eq!(changes.rank_changes[0].action, ChangeAction::Create);
    assert_eq!(changes.rank_changes[0].rank_id, "vip");
    assert!(changes.tag_changes.is_empty());
    assert!(changes.submitted_at > 0);
}

#[tokio::test]
async fn test_second_submit_replaces_first() {
    let server = uploaded_server().await;

    let first = server.post(SESSION).json(&create_vip()).await;
    assert_eq!(first.json::<SubmitResponse>().version, 1);
    let second = server.post(SESSION).json(&delete_member()).await;
    assert_eq!(second.json::<SubmitResponse>().version, 2);

    let changes = server.delete(SESSION).await.json::<ChangeSet>();
    assert_eq!(changes.version, 2);
    assert_eq!(changes.rank_changes.len(), 1);
    assert_eq!(changes.rank_changes[0].action, ChangeAction::Delete);
    assert_eq!(changes.rank_changes[0].rank_id, "member");
}

#[tokio::test]
async fn test_submit_with_null_list() {
    let server = uploaded_server().await;

    let response = server
        .post(SESSION)
        .json(&json!({
            "rankChanges": null,
            "tagChanges": [{ "action": "delete", "tagId": "vip" }]
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<SubmitResponse>().version, 1);

    let changes = server.delete(SESSION).await.json::<ChangeSet>();
    assert!(changes.rank_changes.is_empty());
    assert_eq!(changes.tag_changes.len(), 1);
    assert_eq!(changes.tag_changes[0].tag_id, "vip");
}

#[tokio::test]
async fn test_submit_does_not_touch_snapshot() {
    let server = uploaded_server().await;
    server.post(SESSION).json(&delete_member()).await;

    let snapshot = server.get(SESSION).await.json::<SnapshotView>();
    assert_eq!(snapshot, member_snapshot().view());
}

#[tokio::test]
async fn test_submit_without_session_is_not_found() {
    let server = create_test_server();

    let response = server.post(SESSION).json(&create_vip()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Session not found");
}

#[tokio::test]
async fn test_retrieve_before_submit_is_not_found() {
    let server = uploaded_server().await;

    let response = server.delete(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No changes found", "status": 404 })
    );
}

#[tokio::test]
async fn test_repeated_retrieve_is_identical() {
    let server = uploaded_server().await;
    server.post(SESSION).json(&create_vip()).await;

    let first = server.delete(SESSION).await.text();
    let second = server.delete(SESSION).await.text();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_rank_id_rejected() {
    let server = uploaded_server().await;

    let response = server
        .post(SESSION)
        .json(&json!({ "rankChanges": [{ "action": "delete", "rankId": "" }] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // nothing was stored
    let response = server.delete(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_post_is_empty_submit() {
    let server = uploaded_server().await;

    let response = server.post(SESSION).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<SubmitResponse>().version, 1);

    let changes = server.delete(SESSION).await.json::<ChangeSet>();
    assert!(changes.rank_changes.is_empty());
    assert!(changes.tag_changes.is_empty());
}

#[tokio::test]
async fn test_null_data_is_submit() {
    let server = uploaded_server().await;

    let response = server.post(SESSION).json(&json!({ "data": null })).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<SubmitResponse>().version, 1);
}

#[tokio::test]
async fn test_reupload_keeps_changes() {
    let server = uploaded_server().await;
    server.post(SESSION).json(&create_vip()).await;
    server.post(SESSION).json(&upload_body()).await;

    let changes = server.delete(SESSION).await.json::<ChangeSet>();
    assert_eq!(changes.version, 1);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let server = uploaded_server().await;

    let response = server.get("/api/editor/other").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
