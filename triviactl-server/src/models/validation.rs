//! Validation error types

use std::fmt;

/// Validation error for inbound trivia payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a non-empty JSON object
    InvalidPayload,

    /// `question` or `answer` is absent, null, or empty
    MissingRequiredField,

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload => write!(f, "Invalid JSON data"),
            Self::MissingRequiredField => write!(f, "question and answer are required"),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
