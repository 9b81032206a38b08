//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::MessageResponse;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Upstream returned a non-success status, timed out, or was unreachable
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream answered successfully but the body lacks an expected field
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// No resource exists for the requested id or name
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request parameters failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Startup configuration could not be applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Builds the body used for every not-found style answer.
    pub fn not_found_response(message: impl Into<String>) -> Response {
        let body = Json(json!({
            "success": false,
            "message": message.into()
        }));

        (StatusCode::NOT_FOUND, body).into_response()
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::NotFound(_) | GatewayError::MalformedPayload(_) => {
                return Self::not_found_response("Pokemon not found");
            }
            GatewayError::UpstreamUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable".to_string(),
            ),
            GatewayError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            GatewayError::Config(msg) | GatewayError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
