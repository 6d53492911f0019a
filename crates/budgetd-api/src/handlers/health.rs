//! Health Check Handlers
//!
//! Liveness, readiness and the store diagnostics probe.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::dto::{MessageResponse, ProbeResponse};
use crate::state::AppState;

/// Store errors reported by the probe are cut to this many characters
const PROBE_ERROR_CHARS: usize = 50;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp
    pub timestamp: i64,
}

/// Readiness check response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// Overall status
    pub status: String,
    /// Database status
    pub database: ComponentStatus,
}

/// Component status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentStatus {
    /// Component name
    pub name: String,
    /// Status (healthy/unhealthy)
    pub status: String,
    /// Response time in ms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Backend is running", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Budget Tracker Backend is running"))
}

/// Store diagnostics
///
/// Always 200. Store failures are reported in the `database` field.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Health",
    responses(
        (status = 200, description = "Store diagnostics", body = ProbeResponse)
    )
)]
pub async fn probe(State(state): State<Arc<AppState>>) -> Json<ProbeResponse> {
    let mut response = ProbeResponse {
        backend: "✅ Running".to_string(),
        database: "✅ Available".to_string(),
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status: "Connected".to_string(),
        collections: Vec::new(),
    };

    match state.db.collections().await {
        Ok(collections) => {
            response.collections = collections;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store probe failed");
            let message: String = e.to_string().chars().take(PROBE_ERROR_CHARS).collect();
            response.database = format!("⚠️  Connected but Error: {}", message);
            if e.is_unavailable() {
                response.connection_status = "Not Connected".to_string();
            }
        }
    }

    Json(response)
}

fn env_flag(name: &str) -> String {
    if std::env::var_os(name).is_some() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

/// Health check endpoint
///
/// Returns 200 if the service is running.
/// This is a lightweight check that doesn't verify dependencies.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Readiness check endpoint
///
/// Returns 200 if the store answers queries.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_status = match state.db.health_check().await {
        Ok(health) if health.healthy => ComponentStatus {
            name: "SQLite".to_string(),
            status: "healthy".to_string(),
            latency_ms: Some(health.latency_ms),
            error: None,
        },
        Ok(_) => ComponentStatus {
            name: "SQLite".to_string(),
            status: "unhealthy".to_string(),
            latency_ms: None,
            error: Some("SQLite health check failed".to_string()),
        },
        Err(e) => ComponentStatus {
            name: "SQLite".to_string(),
            status: "unhealthy".to_string(),
            latency_ms: None,
            error: Some(e.to_string()),
        },
    };

    let ready = db_status.status == "healthy";
    let (status_code, overall_status) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status_code,
        Json(ReadinessResponse {
            status: overall_status.to_string(),
            database: db_status,
        }),
    )
}
