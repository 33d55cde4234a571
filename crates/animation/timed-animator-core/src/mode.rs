//! Progress policies: how accumulated time turns into a finished flag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;
use crate::time::AnimationTime;

/// Cycling policy of a timed animator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatorType {
    /// Keeps accumulating past the end; the ratio grows beyond 1.
    #[default]
    Continue,
    /// Pins the ratio at exactly 1 once the end is reached.
    OneTime,
    /// Wraps back by one total duration each time the end is reached.
    Restart,
    /// Reflects the tick direction while finished; cleared again below zero.
    BackAndForth,
}

/// Accumulated time and finished flag after a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub accumulated: AnimationTime,
    pub finished: bool,
}

impl AnimatorType {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::OneTime => "one_time",
            Self::Restart => "restart",
            Self::BackAndForth => "back_and_forth",
        }
    }

    /// Whether negative ticks are part of the mode's contract.
    #[inline]
    pub fn accepts_negative_ticks(&self) -> bool {
        matches!(self, Self::BackAndForth)
    }

    /// Apply `tick` to `prev` under this policy.
    ///
    /// `total` must be strictly positive. Continue and OneTime keep the
    /// finished flag once set. Restart reports it only on the wrapping tick
    /// and subtracts `total` once per tick, so a single tick longer than
    /// `2 * total` leaves the ratio above 1 until later ticks catch up.
    /// BackAndForth sets the flag at the end and clears it once accumulated
    /// time drops below zero, subtracting `2 * tick` on every tick it is set.
    pub fn advance(&self, prev: Progress, tick: AnimationTime, total: AnimationTime) -> Progress {
        let mut accumulated = prev.accumulated + tick;
        let mut finished = prev.finished;
        match self {
            Self::Continue => {
                if accumulated >= total {
                    finished = true;
                }
            }
            Self::OneTime => {
                if accumulated >= total {
                    finished = true;
                }
                if finished {
                    accumulated = total;
                }
            }
            Self::Restart => {
                finished = accumulated >= total;
                if finished {
                    accumulated -= total;
                }
            }
            Self::BackAndForth => {
                if accumulated >= total {
                    finished = true;
                } else if accumulated.is_negative() {
                    finished = false;
                }
                if finished {
                    accumulated -= tick + tick;
                }
            }
        }
        Progress {
            accumulated,
            finished,
        }
    }
}

impl FromStr for AnimatorType {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "continue" => Ok(Self::Continue),
            "one_time" | "onetime" | "once" => Ok(Self::OneTime),
            "restart" | "loop" => Ok(Self::Restart),
            "back_and_forth" | "backandforth" | "ping_pong" => Ok(Self::BackAndForth),
            other => Err(AnimatorError::Config {
                reason: format!("unknown animator type '{other}'"),
            }),
        }
    }
}
