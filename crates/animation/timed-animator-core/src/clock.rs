//! Clock accumulator: elapsed time fed into a timed animator.

use log::{debug, trace, warn};

use crate::error::AnimatorError;
use crate::mode::{AnimatorType, Progress};
use crate::time::{ratio_of, AnimationTime};

/// Tracks accumulated time against a fixed total duration under one policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Clock {
    total: AnimationTime,
    mode: AnimatorType,
    progress: Progress,
}

impl Clock {
    /// Create a clock at zero. Fails if `total` is not strictly positive.
    pub fn new(total: AnimationTime, mode: AnimatorType) -> Result<Self, AnimatorError> {
        if !total.is_positive() {
            return Err(AnimatorError::InvalidDuration {
                millis: total.as_millis(),
            });
        }
        Ok(Self {
            total,
            mode,
            progress: Progress::default(),
        })
    }

    #[inline]
    pub fn total(&self) -> AnimationTime {
        self.total
    }

    #[inline]
    pub fn mode(&self) -> AnimatorType {
        self.mode
    }

    #[inline]
    pub fn accumulated(&self) -> AnimationTime {
        self.progress.accumulated
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.progress.finished
    }

    #[inline]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Overwrite the accumulated state, e.g. when restoring a snapshot.
    #[inline]
    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    /// Current ratio `accumulated / total`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        ratio_of(self.progress.accumulated, self.total)
    }

    /// Add `elapsed`, apply the policy and return the new ratio.
    pub fn tick(&mut self, elapsed: AnimationTime) -> f64 {
        if elapsed.is_negative() && !self.mode.accepts_negative_ticks() {
            warn!(
                "negative tick of {}ms fed to a {} animator",
                elapsed.as_millis(),
                self.mode.name()
            );
        }
        let was_finished = self.progress.finished;
        self.progress = self.mode.advance(self.progress, elapsed, self.total);
        if was_finished != self.progress.finished {
            debug!(
                "{} animator finished: {} -> {}",
                self.mode.name(),
                was_finished,
                self.progress.finished
            );
        }
        let ratio = self.ratio();
        trace!(
            "tick {}ms: accumulated={}ms ratio={ratio}",
            elapsed.as_millis(),
            self.progress.accumulated.as_millis()
        );
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: f64) -> AnimationTime {
        AnimationTime::from_millis(v).unwrap()
    }

    #[test]
    fn rejects_non_positive_total() {
        assert_eq!(
            Clock::new(AnimationTime::ZERO, AnimatorType::Continue),
            Err(AnimatorError::InvalidDuration { millis: 0.0 })
        );
        assert!(Clock::new(ms(-1.0), AnimatorType::OneTime).is_err());
    }

    #[test]
    fn ticks_accumulate() {
        let mut clock = Clock::new(ms(1000.0), AnimatorType::Continue).unwrap();
        assert_eq!(clock.tick(ms(250.0)), 0.25);
        assert_eq!(clock.tick(ms(250.0)), 0.5);
        assert_eq!(
            clock.progress(),
            Progress {
                accumulated: ms(500.0),
                finished: false
            }
        );
    }

    #[test]
    fn restart_ratio_after_wrap() {
        let mut clock = Clock::new(ms(1000.0), AnimatorType::Restart).unwrap();
        let r = clock.tick(ms(1200.0));
        assert!(clock.finished());
        assert!((r - 0.2).abs() < 1e-12);
    }
}
