//! Web API router construction.

use axum::{Router, routing::get};

use std::time::Duration;

use crate::state::AppState;
use crate::web::autocomplete;
use crate::web::middleware::request_id::request_id;
use crate::web::middleware::security_headers::SecurityHeadersLayer;
use crate::web::status;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Creates the web server router
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(status::health))
        .route("/status", get(status::status))
        .route(
            "/tags/autocomplete",
            get(autocomplete::tags_autocomplete).post(autocomplete::create_tag),
        )
        .route(
            "/lists/{name}/autocomplete",
            get(autocomplete::list_autocomplete).post(autocomplete::create_list_value),
        )
        .with_state(app_state);

    Router::new().nest("/api", api_router).layer((
        // Outermost: per-request ID span + severity-proportional response logging.
        axum::middleware::from_fn(request_id),
        SecurityHeadersLayer,
        CompressionLayer::new()
            .zstd(true)
            .br(true)
            .gzip(true)
            .quality(tower_http::CompressionLevel::Fastest),
        TimeoutLayer::new(Duration::from_secs(60)),
    ))
}
