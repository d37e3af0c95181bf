/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError` so handlers can return it directly, plus
 * the response used when a handler panics.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Session not found",
 *   "status": 404
 * }
 * ```
 */

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::{BackendError, INTERNAL_ERROR_MESSAGE};

fn error_body(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({
        "error": message,
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("[Editor] Internal error: {}", self);
        } else {
            tracing::debug!("[Editor] Request rejected with {}: {}", status, self);
        }

        error_body(status, &self.message())
    }
}

/// Response for a panic caught by `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("[Editor] Handler panicked: {}", detail);

    error_body(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
