use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Service kind outside the supported set
    #[error("Unknown service: {0}")]
    UnknownService(String),
    /// Quantity missing, non-finite, or not positive
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::UnknownService(name) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Unknown service '{}'. Expected one of: compute, storage, database",
                    name
                ),
            ),
            Self::InvalidQuantity(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Config(_) => "config_error",
        AppError::UnknownService(_) => "unknown_service",
        AppError::InvalidQuantity(_) => "invalid_quantity",
        AppError::Internal(_) => "internal_error",
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
