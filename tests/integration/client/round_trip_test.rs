//! `EditorClient` against the real router on a local port

use pretty_assertions::assert_eq;
use superior_editor::backend::routes::create_router;
use superior_editor::backend::server::{AppState, ServerConfig};
use superior_editor::shared::ChangeAction;

use crate::common::mock_server::client_for;
use crate::common::*;

#[tokio::test]
async fn test_round_trip_against_router() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::in_memory(ServerConfig::default()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(&format!("http://{}", addr));

    let missing = client.fetch_snapshot(EDITOR_ID).await.unwrap_err();
    assert!(missing.is_not_found());

    client.upload_snapshot(EDITOR_ID, &member_snapshot()).await.unwrap();
    assert_eq!(client.fetch_snapshot(EDITOR_ID).await.unwrap(), member_snapshot().view());

    let first = client.submit_changes(EDITOR_ID, &create_vip()).await.unwrap();
    let second = client.submit_changes(EDITOR_ID, &delete_member()).await.unwrap();
    assert_eq!((first.version, second.version), (1, 2));

    let changes = client.retrieve_changes(EDITOR_ID).await.unwrap();
    assert_eq!(changes.version, 2);
    assert_eq!(changes.rank_changes[0].action, ChangeAction::Delete);
    assert_eq!(client.download_changes(EDITOR_ID).await.unwrap(), changes);
}
