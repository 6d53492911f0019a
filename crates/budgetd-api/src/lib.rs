//! budgetd REST API
//!
//! HTTP + JSON surface over the category, budget and expense stores and the
//! monthly summary.
//!
//! # API Structure
//!
//! ```text
//! /                        - Liveness message
//! /test                    - Store diagnostics
//! /api/
//! ├── /categories          - Create and list categories
//! ├── /budgets             - Upsert a month's budget
//! ├── /budgets/:month      - Budget of a month
//! ├── /expenses            - Record an expense
//! ├── /expenses/:month     - Expenses of a month
//! └── /summary/:month      - Targets vs. actual spend
//! ```

pub mod error;
pub mod state;
pub mod routes;
pub mod handlers;
pub mod dto;
pub mod extractors;
pub mod middleware;
pub mod openapi;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
    /// Enable response compression
    pub enable_compression: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            enable_compression: true,
            enable_tracing: true,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let mut router = Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::service_routes())
        // OpenAPI documentation
        .merge(routes::swagger_routes())
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(axum::middleware::from_fn(middleware::timing_middleware))
        // Shared state
        .with_state(state);

    // Add tracing
    if config.enable_tracing {
        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::make_request_span::<axum::body::Body>),
        );
    }

    // Request ID is set outside the trace layer so the span can record it
    let x_request_id = middleware::X_REQUEST_ID.clone();
    router = router
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    // Add compression
    if config.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    // Add CORS
    if config.enable_cors {
        let cors = if config.cors_origins.iter().any(|o| o == "*") {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(
                    config
                        .cors_origins
                        .iter()
                        .filter_map(|o| o.parse().ok())
                        .collect::<Vec<_>>(),
                )
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers(Any)
        };
        router = router.layer(cors);
    }

    router
}
