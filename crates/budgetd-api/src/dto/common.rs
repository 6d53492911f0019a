//! Common DTO types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Store diagnostics returned by `GET /test`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProbeResponse {
    /// Backend status line
    pub backend: String,
    /// Store status line, carries the store error when listing tables fails
    pub database: String,
    /// Whether `DATABASE_URL` is set
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set
    pub database_name: String,
    pub connection_status: String,
    /// Up to 10 table names
    pub collections: Vec<String>,
}
