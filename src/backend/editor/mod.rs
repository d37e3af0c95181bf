//! Editor Session Module
//!
//! Everything behind `/api/editor/{editor_id}`:
//!
//! - **`store`** - `SessionStore` trait and the in-memory implementation
//! - **`service`** - `EditorService`, the session API operations
//! - **`handlers`** - Axum handlers decoding request shapes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use superior_editor::backend::editor::{EditorService, MemorySessionStore};
//! use superior_editor::shared::Snapshot;
//!
//! let service = EditorService::new(Arc::new(MemorySessionStore::new()));
//! service.upload("abc123", Snapshot::default()).unwrap();
//! assert!(service.fetch("abc123").is_ok());
//! ```

/// Session storage
pub mod store;

/// Session API operations
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use store::{MemorySessionStore, SessionStore};
pub use service::EditorService;
pub use handlers::{handle_download, handle_editor, handle_health};
