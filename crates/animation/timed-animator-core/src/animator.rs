//! Stateless animators: immutable `ratio -> T` mappings and the built-in set.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::TimedConfig;
use crate::error::AnimatorError;
use crate::mode::AnimatorType;
use crate::time::AnimationTime;
use crate::timed::TimedAnimator;
use crate::value::Vec2;

/// Shared output function type.
pub type OutputFn<T> = dyn Fn(f64) -> T + Send + Sync;

/// An immutable mapping from a ratio to an output value.
///
/// Cloning is cheap and shares the underlying function.
pub struct Animator<T> {
    function: Arc<OutputFn<T>>,
}

impl<T> Clone for Animator<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Animator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Animator<T> {
    /// Wrap a pure function.
    pub fn from_fn(function: impl Fn(f64) -> T + Send + Sync + 'static) -> Self {
        Self {
            function: Arc::new(function),
        }
    }

    #[inline]
    pub fn animate(&self, ratio: f64) -> T {
        (self.function)(ratio)
    }

    /// Remap the input through `second`: the result computes
    /// `self(second(ratio))`.
    ///
    /// `second` must produce values in the domain `self` expects; this is not
    /// checked.
    pub fn add(&self, second: &Animator<f64>) -> Animator<T> {
        let first = self.clone();
        let second = second.clone();
        Animator::from_fn(move |ratio| first.animate(second.animate(ratio)))
    }

    /// Post-process every output with `map`.
    pub fn map<U: 'static>(&self, map: impl Fn(T) -> U + Send + Sync + 'static) -> Animator<U> {
        let inner = self.clone();
        Animator::from_fn(move |ratio| map(inner.animate(ratio)))
    }

    /// Lift into a timed animator driven by elapsed time.
    pub fn to_timed(
        self,
        total_duration: AnimationTime,
        start_value: T,
        mode: AnimatorType,
    ) -> Result<TimedAnimator<T>, AnimatorError>
    where
        T: Clone,
    {
        TimedAnimator::new(self, total_duration, start_value, mode)
    }

    /// Lift into a timed animator using construction parameters from a config.
    pub fn to_timed_with(
        self,
        config: &TimedConfig,
        start_value: T,
    ) -> Result<TimedAnimator<T>, AnimatorError>
    where
        T: Clone,
    {
        TimedAnimator::new(self, config.total_duration()?, start_value, config.mode)
    }
}

/// `cos(ratio)`
pub static COSINE: Lazy<Animator<f64>> = Lazy::new(|| Animator::from_fn(f64::cos));

/// `sin(ratio)`
pub static SINE: Lazy<Animator<f64>> = Lazy::new(|| Animator::from_fn(f64::sin));

/// Smoothstep easing, `3t² − 2t³`.
pub static EASE_IN_OUT: Lazy<Animator<f64>> =
    Lazy::new(|| Animator::from_fn(|t| (t * t) * (3.0 - 2.0 * t)));

/// `1 − ratio`
pub static INVERSE: Lazy<Animator<f64>> = Lazy::new(|| Animator::from_fn(|t| 1.0 - t));

/// Point on the unit circle at angle `ratio` (radians).
pub static CIRCLE: Lazy<Animator<Vec2>> = Lazy::new(|| {
    Animator::from_fn(|rad| Vec2::new(COSINE.animate(rad) as f32, SINE.animate(rad) as f32))
});
