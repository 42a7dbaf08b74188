use thiserror::Error;

/// Errors raised while updating a [`ConfigOption`](crate::option::ConfigOption).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("invalid value {value:?} for option {option}")]
    InvalidValue { option: String, value: String },
}
