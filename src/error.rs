//! Application error type and HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, AppError>;

/// All failure modes surfaced by the service
#[derive(Debug, Error)]
pub enum AppError {
    /// Client sent a payload the domain rejects (missing or empty fields)
    #[error("{0}")]
    InvalidRequest(String),

    /// Requested record does not exist
    #[error("{0} not found")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("seed data error: {0}")]
    Seed(#[from] serde_yaml::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat error payload, matching the rest of the JSON surface
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Seed(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
