//! Construction parameters for timed animators.

use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;
use crate::mode::AnimatorType;
use crate::time::AnimationTime;

/// Total duration and cycling policy, loadable from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedConfig {
    /// Length of one cycle in milliseconds. Must be > 0.
    pub total_duration_ms: f64,
    #[serde(default)]
    pub mode: AnimatorType,
}

impl Default for TimedConfig {
    fn default() -> Self {
        Self {
            total_duration_ms: 1000.0,
            mode: AnimatorType::Continue,
        }
    }
}

impl TimedConfig {
    pub fn new(total_duration_ms: f64, mode: AnimatorType) -> Self {
        Self {
            total_duration_ms,
            mode,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AnimatorError> {
        let cfg: TimedConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), AnimatorError> {
        self.total_duration().map(|_| ())
    }

    /// Total duration as animation time; fails unless finite and > 0.
    pub fn total_duration(&self) -> Result<AnimationTime, AnimatorError> {
        let total = AnimationTime::from_millis(self.total_duration_ms)?;
        if !total.is_positive() {
            return Err(AnimatorError::InvalidDuration {
                millis: self.total_duration_ms,
            });
        }
        Ok(total)
    }
}
