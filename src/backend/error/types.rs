/**
 * Backend Error Types
 *
 * Errors raised by the session API and converted to JSON responses.
 *
 * # Error Categories
 *
 * - `NotFound` - no snapshot or no change-set for the session (404)
 * - `BadRequest` - body is not valid JSON or has the wrong shape (400)
 * - `HandlerError` - any other status chosen by a handler, e.g. 405
 * - `StateError` - the session store failed (500, detail is not exposed)
 * - `SharedError` - validation errors from change records (400)
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message returned to callers for every internal fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// ```rust
/// use superior_editor::backend::error::BackendError;
///
/// let err = BackendError::not_found("No changes found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The requested session data does not exist
    #[error("Not found: {message}")]
    NotFound {
        message: String,
    },

    /// The request body could not be understood
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
    },

    /// State management error (e.g. a poisoned store lock)
    #[error("State error: {message}")]
    StateError {
        message: String,
    },

    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization of a response failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Any request shape the API does not recognise
    pub fn method_not_allowed() -> Self {
        Self::handler(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// Get the HTTP status code for this error
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `BadRequest` - 400 Bad Request
    /// - `StateError` - 500 Internal Server Error
    /// - `SharedError` - 400 Bad Request
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::LinkError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is a server fault whose detail must stay in the logs
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message sent to the caller
    pub fn message(&self) -> String {
        if self.is_internal() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::BadRequest { message } => message.clone(),
            Self::StateError { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
