/**
 * Router Configuration
 *
 * Combines the route groups into one Axum router and applies the
 * middleware stack:
 *
 * 1. `CatchPanicLayer` - a panicking handler becomes a 500 JSON response
 * 2. `TraceLayer` - request/response spans
 * 3. `CorsLayer` - any origin, when `cors_allow_any` is set
 *
 * Unknown paths fall back to a 404 JSON body.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::{panic_response, BackendError};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors_allow_any = app_state.config.cors_allow_any;

    let router = configure_api_routes(Router::new())
        .fallback(|| async { BackendError::not_found("Not found") })
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        );

    if cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
