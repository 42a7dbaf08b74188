//! Live configuration options
//!
//! Options are owned by the configuration layer and may be rewritten at any
//! time (for example when the config file is reloaded). Consumers keep a
//! shared handle and read the current value every time they need it, so a
//! change takes effect immediately, even in the middle of an animation.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use crate::error::OptionError;

/// Read access to an externally owned option value
pub trait OptionValue<T> {
    /// Current value of the option
    fn get_value(&self) -> T;
}

/// Shared handle to a [`ConfigOption`]
pub type SharedOption<T> = Arc<ConfigOption<T>>;

/// A named, reloadable configuration value
pub struct ConfigOption<T> {
    name: String,
    default: T,
    value: RwLock<T>,
}

impl<T: Clone> ConfigOption<T> {
    /// Create an option whose current value starts at `default`
    pub fn new(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            value: RwLock::new(default.clone()),
            default,
        }
    }

    /// Create an option and wrap it in a shared handle
    pub fn shared(name: impl Into<String>, default: T) -> SharedOption<T> {
        Arc::new(Self::new(name, default))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> T {
        self.default.clone()
    }

    /// Replace the current value
    pub fn set_value(&self, value: T) {
        *self.value.write().unwrap_or_else(|e| e.into_inner()) = value;
    }

    /// Restore the default value
    pub fn reset_to_default(&self) {
        self.set_value(self.default.clone());
    }
}

impl<T: Clone + FromStr> ConfigOption<T> {
    /// Parse `raw` and store it.
    ///
    /// A value that does not parse leaves the option untouched.
    pub fn set_value_str(&self, raw: &str) -> Result<(), OptionError> {
        match raw.parse::<T>() {
            Ok(value) => {
                self.set_value(value);
                Ok(())
            }
            Err(_) => {
                tracing::warn!(
                    option = %self.name,
                    value = raw,
                    "ignoring invalid option value"
                );
                Err(OptionError::InvalidValue {
                    option: self.name.clone(),
                    value: raw.to_string(),
                })
            }
        }
    }
}

impl<T: Clone> OptionValue<T> for ConfigOption<T> {
    fn get_value(&self) -> T {
        self.value.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ConfigOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOption")
            .field("name", &self.name)
            .field("value", &self.get_value())
            .field("default", &self.default)
            .finish()
    }
}
