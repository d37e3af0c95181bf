/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Editor sessions
 * - `GET|POST|DELETE /api/editor/{editor_id}` - fetch, upload or submit, retrieve
 * - `GET /api/editor/{editor_id}/download` - change-set as a file
 *
 * ## Operations
 * - `GET /health` - liveness and session count
 *
 * Methods a route does not serve answer 405 with a JSON body.
 */

use axum::{
    routing::{any, get},
    Router,
};

use crate::backend::editor::handlers::{handle_download, handle_editor, handle_health, method_not_allowed};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/editor/{editor_id}", any(handle_editor))
        .route(
            "/api/editor/{editor_id}/download",
            get(handle_download).fallback(method_not_allowed),
        )
        .route("/health", get(handle_health).fallback(method_not_allowed))
}
