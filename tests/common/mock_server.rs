//! Helpers for driving `EditorClient` against a `wiremock` server

use serde_json::json;
use superior_editor::egui_app::{Config, EditorClient};
use superior_editor::shared::AppConfig;
use wiremock::ResponseTemplate;

pub const SESSION_PATH: &str = "/api/editor/abc123";

/// Client pointed at `uri`
pub fn client_for(uri: &str) -> EditorClient {
    let config = Config::with_builder(AppConfig::builder().server_url(uri)).unwrap();
    EditorClient::new(config)
}

/// Error response in the session API's `{error, status}` shape
pub fn error_body(message: &str, status: u16) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message, "status": status }))
}
