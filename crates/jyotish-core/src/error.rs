//! Chart computation errors.
//!
//! Every failure that happens after the birth input is structurally valid
//! is a [`ChartError`]. The HTTP layer maps all of them to a 500.

use thiserror::Error;

/// Errors produced while computing a chart from validated birth input.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The date string is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// The time string is not a `HH:MM` clock time.
    #[error("invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    /// A value parsed fine but lies outside what the provider supports.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// The provider could not be reached or is not configured.
    #[error("chart provider unavailable: {0}")]
    Unavailable(String),

    /// Unclassified failure inside the provider.
    #[error("chart computation failed: {0}")]
    Internal(String),
}

impl ChartError {
    /// Whether the message only describes caller-supplied values and can be
    /// shown to the caller as-is.
    pub fn is_input_related(&self) -> bool {
        matches!(
            self,
            ChartError::InvalidDate { .. }
                | ChartError::InvalidTime { .. }
                | ChartError::OutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_names_value() {
        let err = ChartError::InvalidDate {
            value: "not-a-date".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date 'not-a-date': expected YYYY-MM-DD");
        assert!(err.is_input_related());
    }

    #[test]
    fn internal_errors_are_not_input_related() {
        assert!(!ChartError::Internal("boom".into()).is_input_related());
        assert!(!ChartError::Unavailable("offline".into()).is_input_related());
    }
}
