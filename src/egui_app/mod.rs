//! egui Native Desktop App Module
//!
//! Desktop front end for editor sessions. The user pastes the link printed
//! by the game server, browses the session's ranks and tags, and saves
//! edits back to the session API.
//!
//! # Architecture
//!
//! - **`config`** - Configuration management (API base URL, poll interval)
//! - **`client`** - Async HTTP client for the session API
//! - **`editor`** - View model: snapshot, ordering, filter, edit journal
//! - **`pending`** - Lifecycle of a single optimistic edit
//! - **`sync`** - Background snapshot poller
//! - **`state`** - Application state and background task plumbing
//! - **`types`** - View enums and edit-form buffers
//! - **`views`** - egui rendering
//! - **`theme`** - Colors and frame builders
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── client.rs       - Session API client
//! ├── editor.rs       - Editor view model
//! ├── pending.rs      - Edit lifecycle
//! ├── types.rs        - Shared types
//! ├── state/          - Application state
//! ├── sync/           - Snapshot poller
//! ├── theme/          - Colors and styles
//! └── views/          - Landing and editor views
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the editor:
//! // cargo run --bin editor_app
//! ```

pub mod config;
pub mod client;
pub mod editor;
pub mod pending;
pub mod types;
pub mod state;
pub mod sync;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use client::{ClientError, EditorClient};
pub use editor::{EditorError, EditorState, PendingEdit};
pub use pending::EditStatus;
pub use types::{AppView, EditorTab};
pub use state::AppState;
pub use sync::{PollEvent, PollerHandle, SnapshotPoller};
