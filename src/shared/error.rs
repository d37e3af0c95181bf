//! Shared Error Types
//!
//! Error types shared between the session API and the desktop editor.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field of a change record or form failed validation
//! - `LinkError` - An editor link pasted on the landing view could not be used
//!
//! # Usage
//!
//! ```rust
//! use superior_editor::shared::error::SharedError;
//!
//! let error = SharedError::validation("rankId", "Rank id cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both server and editor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Editor link could not be parsed. The message is shown to the user as-is.
    #[error("{message}")]
    LinkError {
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new link error
    pub fn link(message: impl Into<String>) -> Self {
        Self::LinkError {
            message: message.into(),
        }
    }
}
