//! Custom Axum Extractors
//!
//! Request extractors for validated bodies and month path segments.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use budgetd_types::Month;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorResponse};

// =============================================================================
// Validated JSON Extractor
// =============================================================================

/// JSON extractor with validation
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| error_response(ApiError::from(e)))?;

        value
            .validate()
            .map_err(|e| error_response(ApiError::from(e)))?;

        Ok(ValidatedJson(value))
    }
}

// =============================================================================
// Month Path Extractor
// =============================================================================

/// `:month` path segment parsed as a `Month`
pub struct MonthPath(pub Month);

#[async_trait]
impl<S> FromRequestParts<S> for MonthPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| error_response(ApiError::from(e)))?;

        Month::parse(&raw)
            .map(MonthPath)
            .map_err(|e| error_response(ApiError::from(e)))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Create error response from ApiError
pub fn error_response(error: ApiError) -> Response {
    let status = error.status_code();
    let response = ErrorResponse::from(&error);

    (status, Json(response)).into_response()
}
