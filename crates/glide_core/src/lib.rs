//! Glide Core
//!
//! Foundational pieces the animation engine is built on:
//!
//! - **Clocks**: monotonic time sampled on demand, plus a manual clock
//! - **Options**: live configuration values shared with the config loader
//! - **AppMenu glue**: menu addresses stored as view properties
//!
//! # Example
//!
//! ```rust
//! use glide_core::option::{ConfigOption, OptionValue};
//!
//! let duration = ConfigOption::shared("core/duration", 300);
//! duration.set_value(150);
//! assert_eq!(duration.get_value(), 150);
//! ```

pub mod appmenu;
pub mod clock;
pub mod error;
pub mod option;

pub use appmenu::{PropertyMap, ViewProperties};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::OptionError;
pub use option::{ConfigOption, OptionValue, SharedOption};
