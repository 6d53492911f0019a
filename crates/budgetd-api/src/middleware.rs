//! API Middleware
//!
//! Request span construction and request timing.

use axum::{
    extract::Request,
    http::HeaderName,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Header carrying the per-request id
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Requests slower than this are logged at warn level
const SLOW_REQUEST_MS: u128 = 1000;

/// Span wrapping one HTTP request
pub fn make_request_span<B>(request: &axum::http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Request timing middleware
pub async fn timing_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let elapsed = start.elapsed();

    if elapsed.as_millis() > SLOW_REQUEST_MS {
        tracing::warn!(
            method = %method,
            uri = %uri,
            elapsed_ms = elapsed.as_millis(),
            "Slow request detected"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            elapsed_ms = elapsed.as_millis(),
            status = response.status().as_u16(),
            "Request completed"
        );
    }

    response
}

