//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{error::handle_panic, handlers, middleware::RequestIdLayer, state::AppState};

/// Create the router with all routes
///
/// API routes are mounted under `base_path`; an empty path or `/` mounts
/// them at the root. Unmatched requests go to the error boundary.
pub fn create_router(state: AppState, base_path: &str) -> Router {
    let api = Router::new()
        .route("/cafes", post(handlers::cafes::search_cafes))
        .route("/cafes/stations", post(handlers::stations::search_stations));

    let router = Router::new().route("/health", get(handlers::health::health_check));

    let base_path = base_path.trim_end_matches('/');
    let router = if base_path.is_empty() {
        router.merge(api)
    } else {
        router.nest(base_path, api)
    };

    router
        .fallback(handlers::route_not_found)
        .with_state(state)
}

/// Create the router wrapped in the full middleware stack
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    // Order matters: last added = outermost
    create_router(state, &server.base_path)
        .layer(RequestBodyLimitLayer::new(server.max_body_size_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    }
}
