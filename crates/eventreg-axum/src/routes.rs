//! Route definitions and router construction.
//!
//! Every API route is registered twice, with and without a trailing slash.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{MethodRouter, get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Register `method_router` at `path` and at `path/`.
fn route_with_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Build all API routes, typed as `Router<AppState>` without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    let routes: [(&str, MethodRouter<AppState>); 6] = [
        ("/persons", get(handlers::persons::list)),
        ("/persons/{name}", post(handlers::persons::create)),
        ("/events", get(handlers::events::list)),
        (
            "/events/{name}",
            get(handlers::events::get).post(handlers::events::create),
        ),
        ("/register", post(handlers::registrations::register)),
        (
            "/registrations/person/{name}",
            get(handlers::registrations::events_of_person),
        ),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            route_with_slash(router, path, method_router)
        })
}

/// Create the main Axum router with all API routes.
///
/// Axum 0.8 uses brace syntax for path parameters: `{name}`.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
