//! Timed Animator Core (engine-agnostic)
//!
//! Converts elapsed time into a normalized progress ratio and then into an
//! arbitrary output value. Hosts call [`TimedAnimator::tick`] once per update
//! step; combinators build new animators out of existing ones.
//!
//! ```
//! use timed_animator_core::{AnimationTime, Animator, AnimatorType, EASE_IN_OUT};
//!
//! let mut fade = Animator::from_fn(|r| r * 255.0)
//!     .add(&EASE_IN_OUT)
//!     .to_timed(AnimationTime::from_millis(400.0)?, 0.0, AnimatorType::OneTime)?;
//! fade.tick(AnimationTime::from_millis(400.0)?);
//! assert!(fade.finished());
//! assert_eq!(*fade.current_value(), 255.0);
//! # Ok::<(), timed_animator_core::AnimatorError>(())
//! ```

pub mod animator;
pub mod clock;
pub mod config;
pub mod error;
pub mod mode;
pub mod polar;
pub mod time;
pub mod timed;
pub mod transform;
pub mod value;

// Re-exports for consumers (host loops)
pub use animator::{Animator, CIRCLE, COSINE, EASE_IN_OUT, INVERSE, SINE};
pub use clock::Clock;
pub use config::TimedConfig;
pub use error::AnimatorError;
pub use mode::{AnimatorType, Progress};
pub use polar::PolarCoordinate;
pub use time::{from_frequency, ratio_of, to_frequency, AnimationTime};
pub use timed::{AnimatorSnapshot, FinishedHook, TimedAnimator};
pub use transform::Transform;
pub use value::Vec2;

/// Result type for animator construction.
pub type Result<T> = core::result::Result<T, AnimatorError>;
