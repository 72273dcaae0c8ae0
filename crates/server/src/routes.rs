use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/movies", get(handlers::get_catalog))
        .route("/movies/view", get(handlers::get_view))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the browser client: read-only, one origin or any.
pub fn cors_layer(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods([Method::GET]);

    let layer = match origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {origin}"))?;
            layer.allow_origin(origin)
        }
        None => layer.allow_origin(Any),
    };
    Ok(layer)
}
