//! Response envelope shared by every JSON endpoint.
//!
//! Success and error bodies both carry a top-level `status` field so
//! clients can branch on it without looking at the HTTP code.

use jyotish_core::ValidationErrors;
use serde::Serialize;

/// Outcome marker serialized as `"success"` or `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always [`Status::Error`].
    pub status: Status,
    /// Human-readable description, safe to show to the caller.
    pub message: String,
    /// Per-field validation failures, present only on 400 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: Status::Error,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: ValidationErrors) -> Self {
        ErrorResponse {
            status: Status::Error,
            message: message.into(),
            details: Some(details),
        }
    }
}
