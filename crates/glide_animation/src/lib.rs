//! Glide Animation Engine
//!
//! Turns elapsed time into eased progress for compositor transitions.
//!
//! # Features
//!
//! - **Easings**: a registry of named smoothing functions plus cubic bezier curves
//! - **Durations**: clock-driven timers with reverse and exactly-once completion
//! - **Transitions**: start/end pairs interpolated by a shared duration
//! - **Descriptions**: `"300ms circle"` style strings for configuration files
//!
//! # Example
//!
//! ```rust
//! use glide_animation::{AnimationDescription, SimpleAnimation};
//! use glide_core::ConfigOption;
//!
//! let open = ConfigOption::shared(
//!     "window/open_animation",
//!     AnimationDescription::parse("250ms sigmoid").unwrap(),
//! );
//!
//! let mut fade = SimpleAnimation::from_description(open);
//! fade.animate_from_to(0.0, 1.0);
//! while fade.running() {
//!     let _alpha = fade.value();
//!     # break;
//! }
//! ```

pub mod description;
pub mod duration;
pub mod easing;
pub mod scheduler;
pub mod simple;
pub mod transition;

pub use description::{AnimationDescription, DescriptionParseError};
pub use duration::{Direction, Duration, LengthSource, Phase, Tick};
pub use easing::{available_smooth_functions, Easing, Smoothing};
pub use scheduler::{AnimationId, AnimationScheduler};
pub use simple::SimpleAnimation;
pub use transition::TimedTransition;
