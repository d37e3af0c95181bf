//! Shared Module
//!
//! Types shared between the session API and the desktop editor. Everything
//! here is plain data that travels as JSON over HTTP, plus the errors and
//! configuration both sides use.

/// Ranks, tags and snapshots
pub mod model;

/// Change records and change-sets
pub mod changes;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Editor link parsing
pub mod link;

/// Re-export commonly used types for convenience
pub use model::{Rank, Snapshot, SnapshotMarker, SnapshotView, Tag, UploadRequest, UploadResponse};
pub use changes::{ChangeAction, ChangeSet, RankChange, SubmitRequest, SubmitResponse, TagChange};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use link::EditorLink;
