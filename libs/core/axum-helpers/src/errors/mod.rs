pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failure half of the response envelope.
///
/// ```json
/// { "success": false, "message": "Internal server error", "error": "connection reset" }
/// ```
///
/// `error` carries the underlying cause when one exists and is omitted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Underlying cause, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Application error type that renders as the failure envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid query string: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Bad Request: {message}")]
    BadRequest {
        message: String,
        error: Option<String>,
    },

    #[error("Not Found: {0}")]
    NotFound(String),

    /// The payload is the cause; the client sees "Internal server error" plus the cause.
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, error: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            error: Some(error.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SerdeJson(_) | AppError::Io(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::QueryRejection(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::SerdeJson(e) => {
                tracing::error!("JSON error: {:?}", e);
                ErrorResponse::new(messages::INTERNAL_ERROR).with_error(e.to_string())
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                ErrorResponse::new(messages::INTERNAL_ERROR).with_error(e.to_string())
            }
            AppError::QueryRejection(e) => {
                tracing::warn!("Query string rejected: {}", e.body_text());
                ErrorResponse::new(messages::INVALID_QUERY).with_error(e.body_text())
            }
            AppError::BadRequest { message, error } => {
                tracing::info!("Bad request: {} ({:?})", message, error);
                ErrorResponse {
                    success: false,
                    message,
                    error,
                }
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                ErrorResponse::new(msg)
            }
            AppError::InternalServerError(cause) => {
                tracing::error!("Internal server error: {}", cause);
                ErrorResponse::new(messages::INTERNAL_ERROR).with_error(cause)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                ErrorResponse::new(messages::SERVICE_UNAVAILABLE).with_error(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}
