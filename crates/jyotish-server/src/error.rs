//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the API endpoints. It
//! implements `axum::response::IntoResponse` to produce the
//! `{"status":"error", ...}` body with the matching status code. Internal
//! detail is logged here and never copied into the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jyotish_core::{ChartError, ValidationErrors};

use crate::schema::common::ErrorResponse;

/// Message for every 400 response.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data provided.";
/// Message for 500 responses whose cause is not caller-facing.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body missing, not JSON, or fields absent/mistyped (400).
    #[error("invalid input: {0}")]
    Validation(ValidationErrors),

    /// Chart provider failed on structurally valid input (500).
    #[error(transparent)]
    Computation(#[from] ChartError),

    /// Server-side failure outside the provider (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Computation(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => {
                tracing::warn!(%errors, "validation error");
                ErrorResponse::with_details(INVALID_INPUT_MESSAGE, errors)
            }
            ApiError::Computation(err) if err.is_input_related() => {
                tracing::error!(error = %err, "chart computation rejected input");
                ErrorResponse::new(format!("Chart calculation failed: {}", err))
            }
            ApiError::Computation(err) => {
                tracing::error!(error = %err, "critical error during calculation");
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
