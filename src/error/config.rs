//! Configuration errors.

use thiserror::Error;

/// An invalid command-line flag or environment variable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("latitude and longitude must be given together")]
    IncompleteCoordinates,

    #[error("coordinates out of range: {latitude}, {longitude}")]
    CoordinatesOutOfRange { latitude: f64, longitude: f64 },
}

impl ConfigError {
    pub fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
