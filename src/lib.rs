//! Superior Editor - Main Library
//!
//! A web editor for a game server's ranks and tags. The game server uploads a
//! snapshot of its configuration to a short-lived editor session; a user opens
//! the session, browses and edits the ranks and tags, and submits a change-set
//! that the game server later downloads and applies.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and client
//!   - Rank, tag and snapshot records
//!   - Change records, change-sets, submit/upload payloads
//!   - Editor link parsing, client configuration, error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server exposing `/api/editor/{editor_id}`
//!   - Session store with optional idle eviction
//!
//! - **`egui_app`** - Native desktop editor (egui/eframe)
//!   - Landing view that accepts the editor link
//!   - Rank/tag browser with filter, edit forms and delete confirmation
//!   - Snapshot poller and optimistic edit journal
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `editor-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use superior_editor::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and link parsing
//! - `backend::BackendError` maps onto HTTP status codes
//! - `egui_app::client::ClientError` for failed API calls

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
