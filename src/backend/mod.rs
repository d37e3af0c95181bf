//! Backend Module
//!
//! The editor session server: an Axum HTTP service holding one snapshot and
//! one pending change-set per editor session.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`editor`** - Session store, session API and handlers
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! `AppState` holds an `Arc<EditorService>` over an `Arc<dyn SessionStore>`.
//! The in-memory store guards its map with a mutex; each operation is a
//! single-key read or overwrite. Submits are additionally serialized by the
//! service so change-set versions never repeat.
//!
//! # Endpoints
//!
//! - `GET /api/editor/{editor_id}` - fetch snapshot
//! - `POST /api/editor/{editor_id}` - upload (`{"data": ...}`) or submit changes
//! - `DELETE /api/editor/{editor_id}` - retrieve pending changes
//! - `GET /api/editor/{editor_id}/download` - pending changes as a file
//! - `GET /health`

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Editor sessions
#[cfg(feature = "ssr")]
pub mod editor;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::create_app;
#[cfg(feature = "ssr")]
pub use editor::{EditorService, MemorySessionStore, SessionStore};
#[cfg(feature = "ssr")]
pub use error::BackendError;
