//! Error types for timecode operations.

use thiserror::Error;

/// Main error type for timecode conversion and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    #[error("Invalid rational: {numerator}/{denominator}")]
    InvalidRational { numerator: i64, denominator: i64 },

    #[error("Unknown timecode format: {0}")]
    UnknownFormat(String),

    #[error("Format mismatch: {left} vs {right}")]
    FormatMismatch { left: String, right: String },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        component: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Timecode overflow")]
    Overflow,
}

impl TimecodeError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}

/// Result type alias for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;
