//! Location-provider errors.

use thiserror::Error;

/// Why coordinates could not be obtained.
///
/// The refresh controller treats both variants the same way: it falls back to
/// a reading without coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user refused access to their location.
    #[error("location access denied")]
    Denied,

    /// No location capability, or it did not answer in time.
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// Toast title for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            LocationError::Denied => "Location access denied",
            LocationError::Unavailable(_) => "Location unavailable",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            LocationError::Denied => "LOCATION_DENIED",
            LocationError::Unavailable(_) => "LOCATION_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LocationError::Denied.to_string(), "location access denied");
        assert_eq!(
            LocationError::Unavailable("no provider".to_string()).to_string(),
            "location unavailable: no provider"
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(LocationError::Denied.title(), "Location access denied");
        assert_eq!(
            LocationError::Unavailable(String::new()).title(),
            "Location unavailable"
        );
    }
}
