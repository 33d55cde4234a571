//! Timed animators: the tick-driven state machine and its combinators.
//!
//! A `TimedAnimator` owns a [`Clock`] and a `Kernel` that turns the clock's
//! ratio into an output value. Combinators consume the animators they wrap, so
//! no two animators ever share mutable state.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animator::Animator;
use crate::clock::Clock;
use crate::error::AnimatorError;
use crate::mode::{AnimatorType, Progress};
use crate::time::AnimationTime;

/// Callback fired by [`TimedAnimator::when_finished`].
pub type FinishedHook<T> = Box<dyn FnMut(&TimedAnimator<T>) + Send>;

/// How a timed animator produces a value from a ratio.
enum Kernel<T> {
    /// Plain output function.
    Function(Animator<T>),
    /// `inner(remap(ratio))`.
    Mapped {
        inner: Box<TimedAnimator<T>>,
        remap: Animator<f64>,
    },
    /// First half of the ratio range drives `base`, second half drives `next`.
    Continuation {
        base: Box<TimedAnimator<T>>,
        next: Box<TimedAnimator<T>>,
    },
    /// Ticks `inner` by `ratio * total` and reports finish transitions.
    Hook {
        inner: Box<TimedAnimator<T>>,
        callback: FinishedHook<T>,
        notified: bool,
    },
}

impl<T> Kernel<T> {
    fn name(&self) -> &'static str {
        match self {
            Kernel::Function(_) => "function",
            Kernel::Mapped { .. } => "mapped",
            Kernel::Continuation { .. } => "continuation",
            Kernel::Hook { .. } => "hook",
        }
    }
}

/// Minimal mutable state of a timed animator, for persistence.
///
/// Only the outermost animator is captured; animators wrapped by
/// [`TimedAnimator::when_finished`] keep their own clocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimatorSnapshot<T> {
    pub accumulated: AnimationTime,
    pub finished: bool,
    pub current_value: T,
}

/// Animator advanced by elapsed-time ticks under an [`AnimatorType`] policy.
pub struct TimedAnimator<T> {
    clock: Clock,
    start_value: T,
    current_value: T,
    kernel: Kernel<T>,
}

impl<T: Clone + 'static> TimedAnimator<T> {
    /// Create an animator at zero accumulated time whose current value is
    /// `start_value`. Fails if `total_duration` is not strictly positive.
    pub fn new(
        function: Animator<T>,
        total_duration: AnimationTime,
        start_value: T,
        mode: AnimatorType,
    ) -> Result<Self, AnimatorError> {
        let clock = Clock::new(total_duration, mode)?;
        Ok(Self::with_kernel(clock, start_value, Kernel::Function(function)))
    }

    fn with_kernel(clock: Clock, start_value: T, kernel: Kernel<T>) -> Self {
        Self {
            clock,
            current_value: start_value.clone(),
            start_value,
            kernel,
        }
    }

    /// A fresh clock with this animator's duration and mode.
    fn fresh_clock(&self) -> Clock {
        let mut clock = self.clock.clone();
        clock.set_progress(Progress::default());
        clock
    }

    #[inline]
    pub fn total_duration(&self) -> AnimationTime {
        self.clock.total()
    }

    #[inline]
    pub fn mode(&self) -> AnimatorType {
        self.clock.mode()
    }

    #[inline]
    pub fn accumulated(&self) -> AnimationTime {
        self.clock.accumulated()
    }

    /// Ratio as of the most recent tick.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.clock.ratio()
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.clock.finished()
    }

    #[inline]
    pub fn start_value(&self) -> &T {
        &self.start_value
    }

    #[inline]
    pub fn current_value(&self) -> &T {
        &self.current_value
    }

    /// Advance by `elapsed` and recompute the current value.
    ///
    /// Negative `elapsed` is only meaningful for [`AnimatorType::BackAndForth`];
    /// other modes expect monotonic ticks.
    pub fn tick(&mut self, elapsed: AnimationTime) -> &T {
        let ratio = self.clock.tick(elapsed);
        self.current_value = self.animate(ratio);
        &self.current_value
    }

    /// Convenience for hosts that report frame time as `std::time::Duration`.
    pub fn tick_duration(&mut self, elapsed: std::time::Duration) -> &T {
        self.tick(elapsed.into())
    }

    /// Evaluate the output at `ratio` without touching this animator's clock.
    ///
    /// Animators built with [`when_finished`](Self::when_finished) tick their
    /// wrapped animator here, so this still takes `&mut self`.
    pub fn animate(&mut self, ratio: f64) -> T {
        let total = self.clock.total();
        match &mut self.kernel {
            Kernel::Function(function) => function.animate(ratio),
            Kernel::Mapped { inner, remap } => inner.animate(remap.animate(ratio)),
            Kernel::Continuation { base, next } => {
                if ratio < 0.5 {
                    base.animate(ratio * 2.0)
                } else {
                    next.animate(ratio * 2.0 - 1.0)
                }
            }
            Kernel::Hook {
                inner,
                callback,
                notified,
            } => {
                let value = inner.tick(total * ratio).clone();
                if inner.finished() {
                    if !*notified {
                        *notified = true;
                        debug!("finished hook fired at ratio {ratio}");
                        callback(&**inner);
                    }
                } else {
                    *notified = false;
                }
                value
            }
        }
    }

    /// Back to zero accumulated time with the start value.
    pub fn reset(&mut self) {
        self.clock.set_progress(Progress::default());
        self.current_value = self.start_value.clone();
    }

    pub fn snapshot(&self) -> AnimatorSnapshot<T> {
        AnimatorSnapshot {
            accumulated: self.clock.accumulated(),
            finished: self.clock.finished(),
            current_value: self.current_value.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: AnimatorSnapshot<T>) {
        self.clock.set_progress(Progress {
            accumulated: snapshot.accumulated,
            finished: snapshot.finished,
        });
        self.current_value = snapshot.current_value;
    }

    /// Remap the input ratio through `second` before evaluating this animator.
    ///
    /// Keeps duration and mode; the new animator starts at zero with this
    /// animator's current value.
    pub fn add(self, second: &Animator<f64>) -> TimedAnimator<T> {
        let clock = self.fresh_clock();
        let start = self.current_value.clone();
        Self::with_kernel(
            clock,
            start,
            Kernel::Mapped {
                inner: Box::new(self),
                remap: second.clone(),
            },
        )
    }

    /// Chain `next` after this animator over a shared timeline.
    ///
    /// The result uses this animator's duration, start value and mode. Ratios
    /// below 0.5 evaluate this animator at `2r`; the rest evaluate `next` at
    /// `2r - 1`.
    pub fn continue_with(self, next: TimedAnimator<T>) -> TimedAnimator<T> {
        let clock = self.fresh_clock();
        let start = self.start_value.clone();
        Self::with_kernel(
            clock,
            start,
            Kernel::Continuation {
                base: Box::new(self),
                next: Box::new(next),
            },
        )
    }

    /// Chain a raw output function, timed with this animator's parameters.
    pub fn continue_with_fn(
        self,
        function: impl Fn(f64) -> T + Send + Sync + 'static,
    ) -> TimedAnimator<T> {
        let next = Self::with_kernel(
            self.fresh_clock(),
            self.start_value.clone(),
            Kernel::Function(Animator::from_fn(function)),
        );
        self.continue_with(next)
    }

    /// Wrap this animator so `callback` runs each time it becomes finished.
    ///
    /// Every evaluation of the wrapper ticks the wrapped animator by
    /// `ratio * total_duration`. The callback fires once per transition of the
    /// wrapped animator's finished flag from false to true and receives the
    /// wrapped animator.
    pub fn when_finished(
        self,
        callback: impl FnMut(&TimedAnimator<T>) + Send + 'static,
    ) -> TimedAnimator<T> {
        let clock = self.fresh_clock();
        let start = self.start_value.clone();
        Self::with_kernel(
            clock,
            start,
            Kernel::Hook {
                inner: Box::new(self),
                callback: Box::new(callback),
                notified: false,
            },
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for TimedAnimator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedAnimator")
            .field("clock", &self.clock)
            .field("kernel", &self.kernel.name())
            .field("start_value", &self.start_value)
            .field("current_value", &self.current_value)
            .finish()
    }
}
