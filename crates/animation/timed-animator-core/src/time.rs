/**
 * Time handling for animators.
 * Durations are signed: a back-and-forth animator walks its accumulated
 * time below zero before turning around, which std::time::Duration cannot
 * represent.
 */
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Signed span of animation time, stored as nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize, Default)]
pub struct AnimationTime(i64);

impl AnimationTime {
    pub const ZERO: AnimationTime = AnimationTime(0);

    /// Create animation time from nanoseconds
    #[inline]
    pub const fn from_nanos(nanoseconds: i64) -> Self {
        Self(nanoseconds)
    }

    /// Create animation time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, AnimatorError> {
        Self::from_scaled(milliseconds, NANOS_PER_MILLI)
    }

    /// Create animation time from seconds
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, AnimatorError> {
        Self::from_scaled(seconds, NANOS_PER_SECOND)
    }

    /// `value * nanos_per_unit`, rejected unless finite and within `i64` nanoseconds.
    fn from_scaled(value: f64, nanos_per_unit: f64) -> Result<Self, AnimatorError> {
        let nanos = (value * nanos_per_unit).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !nanos.is_finite() || nanos < i64::MIN as f64 || nanos >= i64::MAX as f64 {
            return Err(AnimatorError::InvalidTime { time: value });
        }
        Ok(Self(nanos as i64))
    }

    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / NANOS_PER_SECOND
    }

    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / NANOS_PER_MILLI
    }

    #[inline]
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::ops::Add for AnimationTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for AnimationTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for AnimationTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::ops::SubAssign for AnimationTime {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl std::ops::Neg for AnimationTime {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

/// Scale a span by a real factor, rounding to the nearest nanosecond.
impl std::ops::Mul<f64> for AnimationTime {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }
}

impl From<Duration> for AnimationTime {
    fn from(duration: Duration) -> Self {
        AnimationTime(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
    }
}

/// Time-to-ratio conversion: `elapsed / total` as a real number.
///
/// Callers guarantee `total` is non-zero; timed animators validate this at
/// construction.
#[inline]
pub fn ratio_of(elapsed: AnimationTime, total: AnimationTime) -> f64 {
    elapsed.0 as f64 / total.0 as f64
}

/// Number of periods of `span` per second. A zero span has zero frequency.
#[inline]
pub fn to_frequency(span: AnimationTime) -> f64 {
    if span.0 == 0 {
        0.0
    } else {
        NANOS_PER_SECOND / span.0 as f64
    }
}

/// Period of a frequency given in hertz. Zero hertz maps to a zero period.
pub fn from_frequency(hz: f64) -> Result<AnimationTime, AnimatorError> {
    if !hz.is_finite() || hz < 0.0 {
        return Err(AnimatorError::InvalidFrequency { hz });
    }
    if hz == 0.0 {
        return Ok(AnimationTime::ZERO);
    }
    AnimationTime::from_seconds(1.0 / hz)
}
