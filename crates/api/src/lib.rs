//! HTTP API server for the Draw.io render extension.
//!
//! Serves the extension endpoints (greeting and diagram decoding) under a
//! configurable base path, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared application state accessible from all handlers.
pub struct AppState {
    /// The fixed greeting returned by the hello endpoint.
    pub greeting: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            greeting: format!(
                "Hello, world! This is the '{}/hello' endpoint. \
                 Try visiting me in your browser!",
                config.base_path()
            ),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(config: &Config, metrics_handle: PrometheusHandle) -> Router {
    let state = Arc::new(AppState::new(config));

    let extension_router = Router::new()
        .route("/hello", get(routes::hello::get))
        .route("/diagram", post(routes::diagram::decode))
        .with_state(state);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .nest(&config.base_path(), extension_router)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
