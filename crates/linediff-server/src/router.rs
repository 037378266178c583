use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use linediff_protocol::endpoints;

use crate::config::ServerConfig;
use crate::handler;

/// Build the axum router with all diff service endpoints.
pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::DIFFS, post(handler::diffs_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router.layer(cors_layer())
    } else {
        router
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
