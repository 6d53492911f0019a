//! API error handling
//!
//! Every failure leaves the API as `{code, msg}` JSON with a matching HTTP
//! status. Client errors use codes in the -1100 range, missing resources
//! -2000, store failures -5000.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use budgetd_db::DbError;
use budgetd_types::BudgetError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Request Errors (-1100 to -1199)
    // =========================================================================
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidMonth(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    // =========================================================================
    // Resource Errors (-2000 to -2099)
    // =========================================================================
    #[error("{0}")]
    NotFound(String),

    // =========================================================================
    // Internal Errors (-5000 to -5099)
    // =========================================================================
    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Database error")]
    DatabaseError,
}

impl ApiError {
    /// Get the numeric error code
    pub fn error_code(&self) -> i32 {
        match self {
            Self::InvalidRequestBody(_) => -1100,
            Self::ValidationError(_) => -1102,
            Self::InvalidMonth(_) => -1103,
            Self::UnknownCategory(_) => -1104,

            Self::NotFound(_) => -2001,

            Self::StoreUnavailable => -5001,
            Self::DatabaseError => -5002,
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_)
            | Self::ValidationError(_)
            | Self::InvalidMonth(_)
            | Self::UnknownCategory(_) => StatusCode::BAD_REQUEST,

            Self::NotFound(_) => StatusCode::NOT_FOUND,

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric error code
    pub code: i32,
    /// Human-readable error message
    pub msg: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.error_code(),
            msg: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(msg) => Self::NotFound(msg),
            DbError::InvalidInput(msg) => Self::ValidationError(msg),
            err if err.is_unavailable() => {
                tracing::error!(error = %err, "Store unavailable");
                Self::StoreUnavailable
            }
            err => {
                tracing::error!(error = ?err, "Database error");
                Self::DatabaseError
            }
        }
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::InvalidMonth(_) => Self::InvalidMonth(err.to_string()),
            _ => Self::ValidationError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequestBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidMonth(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!("{}: {}", field, e.message.as_deref().unwrap_or("invalid"))
                })
            })
            .collect();

        // Nested list entries (e.g. allocations[0].target) are not in field_errors()
        for (field, kind) in err.errors() {
            if let validator::ValidationErrorsKind::List(items) = kind {
                for (index, nested) in items {
                    for (inner, errors) in nested.field_errors() {
                        for e in errors {
                            messages.push(format!(
                                "{}[{}].{}: {}",
                                field,
                                index,
                                inner,
                                e.message.as_deref().unwrap_or("invalid")
                            ));
                        }
                    }
                }
            }
        }

        messages.sort();
        Self::ValidationError(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::ValidationError("x".to_string()).error_code(), -1102);
        assert_eq!(ApiError::NotFound("x".to_string()).error_code(), -2001);
        assert_eq!(ApiError::StoreUnavailable.error_code(), -5001);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("Budget not found for month".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::InvalidMonth("bad".to_string()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::StoreUnavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::DatabaseError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_db_error_mapping() {
        assert!(matches!(
            ApiError::from(DbError::NotFound("Budget not found for month".to_string())),
            ApiError::NotFound(msg) if msg == "Budget not found for month"
        ));
        assert!(matches!(
            ApiError::from(DbError::Connection("refused".to_string())),
            ApiError::StoreUnavailable
        ));
        assert!(matches!(
            ApiError::from(DbError::Migration("boom".to_string())),
            ApiError::DatabaseError
        ));
    }

    #[test]
    fn test_budget_error_mapping() {
        let err = ApiError::from(BudgetError::InvalidMonth("2024-13".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid month '2024-13': expected YYYY-MM");

        let err = ApiError::from(BudgetError::NegativeAmount { field: "amount", value: -1.0 });
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_not_found_message_is_verbatim() {
        let response = ErrorResponse::from(&ApiError::NotFound("Budget not found for month".to_string()));
        assert_eq!(response.msg, "Budget not found for month");
        assert_eq!(response.code, -2001);
    }
}
