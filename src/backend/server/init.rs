/**
 * Server Initialization
 *
 * Builds the Axum application:
 * 1. Load configuration
 * 2. Create the session store and `AppState`
 * 3. Start the idle-session eviction task when a TTL is configured
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::editor::{EditorService, MemorySessionStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the application from the environment's configuration
pub async fn create_app() -> Router<()> {
    create_app_with(ServerConfig::load()).await
}

/// Create the application with an explicit configuration and a fresh
/// in-memory session store
pub async fn create_app_with(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing editor session server");
    if let Err(e) = config.validate() {
        tracing::warn!("Server configuration is invalid ({}); clamping where needed", e);
    }

    let app_state = AppState::new(config, Arc::new(MemorySessionStore::new()));

    if let Some(ttl) = app_state.config.session_idle_ttl() {
        spawn_eviction_task(app_state.editor.clone(), ttl, app_state.config.eviction_interval());
    } else {
        tracing::info!("Session eviction disabled; sessions live until restart");
    }

    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}

/// Periodically drop sessions idle for longer than `ttl`
fn spawn_eviction_task(
    editor: Arc<EditorService>,
    ttl: std::time::Duration,
    every: std::time::Duration,
) {
    tracing::info!(
        "Evicting sessions idle for {}s every {}s",
        ttl.as_secs(),
        every.as_secs()
    );

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match editor.evict_idle(ttl) {
                Ok(0) => {}
                Ok(removed) => tracing::info!("[Store] Evicted {} idle sessions", removed),
                Err(e) => tracing::error!("[Store] Eviction failed: {}", e),
            }
        }
    });
}
