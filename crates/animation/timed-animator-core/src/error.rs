//! Error types for animator construction and configuration.

use serde::{Deserialize, Serialize};

/// Errors raised when building animators or converting time values.
///
/// Ticking never fails: every variant here is caught at construction or
/// conversion time so that ratios are never computed from a bad duration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimatorError {
    /// Total duration must be strictly positive and finite.
    #[error("Invalid total duration: {millis}ms (must be > 0)")]
    InvalidDuration { millis: f64 },

    /// Time value that cannot be represented (NaN or infinite).
    #[error("Invalid time value: {time}")]
    InvalidTime { time: f64 },

    /// Frequency that cannot be turned into a period.
    #[error("Invalid frequency: {hz}Hz")]
    InvalidFrequency { hz: f64 },

    /// Malformed configuration document.
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl AnimatorError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } | Self::Config { .. } => "configuration",
            Self::InvalidTime { .. } | Self::InvalidFrequency { .. } => "time",
        }
    }
}

impl From<serde_json::Error> for AnimatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
