//! Quill — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quill_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Tracing subscriber or exporter setup failed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// The caller did not present a valid token.
    Unauthorized,
    /// A domain operation failed.
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Unauthorized => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    error: "Unauthorized",
                    message: None,
                },
            ),
            Self::Domain(err) => {
                let (status, error_code, message) = match &err {
                    DomainError::BlogNotFound(_) => {
                        (StatusCode::NOT_FOUND, "blog_not_found", Some(err.to_string()))
                    }
                    DomainError::Validation(_) => {
                        (StatusCode::LENGTH_REQUIRED, "missing input", Some(err.to_string()))
                    }
                    // Store details are logged where they occur, not returned.
                    DomainError::Infrastructure(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error", None)
                    }
                };
                (
                    status,
                    ErrorBody {
                        error: error_code,
                        message,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
