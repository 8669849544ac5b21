//! Error handling and HTTP error conversion
//!
//! Domain errors from `magic_slash_config` are converted to HTTP responses
//! at the handler boundary. Every error body has the same shape:
//!
//! ```json
//! { "error": "Repository 'api' not found" }
//! ```
//!
//! Filesystem failures never leak their details to the client; the handler
//! supplies a generic message and the cause is logged server-side.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use magic_slash_config::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error response for all API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input; rendered as 400
    #[error("{0}")]
    Validation(String),

    /// Unknown repository or missing template; rendered as 404
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; rendered as 500 with `message` only
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: ConfigError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Map a domain error, using `context` as the client-facing message for
    /// failures that are not the caller's fault.
    pub fn from_config(error: ConfigError, context: &str) -> Self {
        match error {
            ConfigError::Validation(message) => ApiError::Validation(message),
            ConfigError::AlreadyExists { .. } => ApiError::Validation(error.to_string()),
            ConfigError::NotFound { .. } | ConfigError::TemplateNotFound => {
                ApiError::NotFound(error.to_string())
            }
            ConfigError::Io { .. }
            | ConfigError::HomeDirectoryUnavailable
            | ConfigError::UnreadableRepositories { .. } => ApiError::Internal {
                message: context.to_string(),
                source: error,
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Attach the endpoint's generic failure message to a domain result.
pub trait ConfigResultExt<T> {
    fn or_api_error(self, context: &str) -> Result<T, ApiError>;
}

impl<T> ConfigResultExt<T> for ConfigResult<T> {
    fn or_api_error(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_config(e, context))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log_error(&self, status);

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match error {
        ApiError::Internal { message, source } => {
            tracing::error!(status = %status, error = %source, "API error: {}", message);
        }
        _ => {
            tracing::warn!(status = %status, "API error: {}", error);
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
