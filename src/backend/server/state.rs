/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. Handlers
 * extract only the part they need through the `FromRef` implementations.
 *
 * ```rust,no_run
 * use std::sync::Arc;
 * use axum::extract::State;
 * use superior_editor::backend::editor::EditorService;
 *
 * async fn handler(State(service): State<Arc<EditorService>>) {
 *     let _ = service.session_count();
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::editor::{EditorService, MemorySessionStore, SessionStore};
use crate::backend::server::config::ServerConfig;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Session API over the configured store
    pub editor: Arc<EditorService>,
    /// Settings the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            editor: Arc::new(EditorService::new(store)),
            config: Arc::new(config),
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(MemorySessionStore::new()))
    }
}

impl FromRef<AppState> for Arc<EditorService> {
    fn from_ref(state: &AppState) -> Self {
        state.editor.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
