//! API Routes
//!
//! Route definitions for all API endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create `/api` routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Categories
        .route(
            "/categories",
            post(handlers::category::create_category).get(handlers::category::list_categories),
        )
        // Budgets
        .route("/budgets", post(handlers::budget::upsert_budget))
        .route("/budgets/:month", get(handlers::budget::get_budget))
        // Expenses
        .route("/expenses", post(handlers::expense::create_expense))
        .route("/expenses/:month", get(handlers::expense::list_expenses))
        // Summary
        .route("/summary/:month", get(handlers::summary::get_summary))
}

/// Service-level routes: liveness, diagnostics, health and readiness
pub fn service_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/test", get(handlers::health::probe))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;
    use crate::openapi::ApiDoc;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()))
}
