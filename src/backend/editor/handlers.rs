/**
 * Editor Session Handlers
 *
 * `/api/editor/{editor_id}` dispatches on the request shape:
 *
 * - `POST` with a non-null `data` field - upload a snapshot
 * - `POST` without `data` - submit `rankChanges` / `tagChanges`
 * - `GET` - fetch the current snapshot
 * - `DELETE` - retrieve the pending change-set
 * - anything else - 405
 *
 * `/api/editor/{editor_id}/download` serves the pending change-set as a
 * JSON attachment.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::backend::editor::service::EditorService;
use crate::backend::error::BackendError;
use crate::shared::{Snapshot, SubmitRequest};

/// Decode a JSON body. An empty body counts as `{}`.
fn parse_body(body: &Bytes) -> Result<Value, BackendError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("[Editor] Failed to parse request body ({} bytes): {}", body.len(), e);
        BackendError::bad_request(format!("Invalid request body: {}", e))
    })
}

/// Single entry point for `/api/editor/{editor_id}`
pub async fn handle_editor(
    State(service): State<Arc<EditorService>>,
    Path(editor_id): Path<String>,
    method: Method,
    body: Bytes,
) -> Result<Response, BackendError> {
    tracing::debug!("[Editor] {} /api/editor/{}", method, editor_id);

    match method {
        Method::GET => Ok(Json(service.fetch(&editor_id)?).into_response()),
        Method::DELETE => Ok(Json(service.retrieve(&editor_id)?).into_response()),
        Method::POST => {
            let mut payload = parse_body(&body)?;
            let data = payload
                .as_object_mut()
                .and_then(|object| object.remove("data"))
                .filter(|data| !data.is_null());

            match data {
                Some(data) => {
                    let snapshot: Snapshot = serde_json::from_value(data).map_err(|e| {
                        BackendError::bad_request(format!("Invalid snapshot: {}", e))
                    })?;
                    Ok(Json(service.upload(&editor_id, snapshot)?).into_response())
                }
                None => {
                    let request: SubmitRequest = serde_json::from_value(payload).map_err(|e| {
                        BackendError::bad_request(format!("Invalid changes: {}", e))
                    })?;
                    Ok(Json(service.submit(&editor_id, request).await?).into_response())
                }
            }
        }
        _ => Err(BackendError::method_not_allowed()),
    }
}

/// Serve the pending change-set as a downloadable file
pub async fn handle_download(
    State(service): State<Arc<EditorService>>,
    Path(editor_id): Path<String>,
) -> Result<Response, BackendError> {
    let changes = service.retrieve(&editor_id)?;
    let body = serde_json::to_vec_pretty(&changes)?;
    let disposition = format!(
        "attachment; filename=\"changes-{}-v{}.json\"",
        sanitize_filename(&editor_id),
        changes.version
    );

    tracing::info!("[Editor] Download of change-set v{} for {}", changes.version, editor_id);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Fallback for methods a route does not serve
pub async fn method_not_allowed() -> BackendError {
    BackendError::method_not_allowed()
}

/// Health check with the number of live sessions
pub async fn handle_health(
    State(service): State<Arc<EditorService>>,
) -> Result<Json<Value>, BackendError> {
    let sessions = service.session_count()?;
    Ok(Json(serde_json::json!({ "status": "ok", "sessions": sessions })))
}

fn sanitize_filename(editor_id: &str) -> String {
    editor_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
