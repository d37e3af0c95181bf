//! Test servers over the real router

use axum::http::StatusCode;
use axum_test::TestServer;
use superior_editor::backend::routes::create_router;
use superior_editor::backend::server::{AppState, ServerConfig};

use super::upload_body;

pub const SESSION: &str = "/api/editor/abc123";

pub fn create_test_server() -> TestServer {
    let app = create_router(AppState::in_memory(ServerConfig::default()));
    TestServer::new(app).unwrap()
}

/// Server with `member_snapshot` already uploaded
pub async fn uploaded_server() -> TestServer {
    let server = create_test_server();
    let response = server.post(SESSION).json(&upload_body()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    server
}
