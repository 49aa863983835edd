//! Application configuration.
//!
//! Defaults, then environment variables, then command-line flags.
//!
//! # Example
//!
//! ```ignore
//! use aqmon::startup::AppConfig;
//!
//! let config = AppConfig::from_env()?
//!     .with_seed(Some(7))
//!     .with_latency(std::time::Duration::ZERO);
//! ```

use std::ops::Range;
use std::time::Duration;

use crate::adapters::simulated::{DEFAULT_AQI_RANGE, DEFAULT_LATENCY};
use crate::adapters::{ConfiguredLocation, SimulatedSource};
use crate::error::ConfigError;
use crate::models::{Coordinates, DEFAULT_LOCATION_LABEL};
use crate::refresh::RefreshSettings;

pub const ENV_LAT: &str = "AQMON_LAT";
pub const ENV_LON: &str = "AQMON_LON";
pub const ENV_DENY_LOCATION: &str = "AQMON_DENY_LOCATION";
pub const ENV_LATENCY_MS: &str = "AQMON_LATENCY_MS";
pub const ENV_SEED: &str = "AQMON_SEED";
pub const ENV_FAILURE_RATE: &str = "AQMON_FAILURE_RATE";
pub const ENV_PLACEHOLDER: &str = "AQMON_PLACEHOLDER";
pub const ENV_TOAST_MS: &str = "AQMON_TOAST_MS";

/// Everything needed to wire the controller and the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Location label shown without coordinates
    pub placeholder: String,
    /// Position reported by the location provider
    pub coordinates: Option<Coordinates>,
    /// Simulate a refused location permission
    pub deny_location: bool,
    /// Simulated fetch latency
    pub latency: Duration,
    /// Simulated AQI range
    pub aqi_range: Range<u32>,
    /// Probability of a simulated fetch failure
    pub failure_rate: f64,
    /// Seed for reproducible readings
    pub seed: Option<u64>,
    pub fetch_timeout: Duration,
    pub location_timeout: Duration,
    /// How long a toast stays on screen
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_LOCATION_LABEL.to_string(),
            coordinates: None,
            deny_location: false,
            latency: DEFAULT_LATENCY,
            aqi_range: DEFAULT_AQI_RANGE,
            failure_rate: 0.0,
            seed: None,
            fetch_timeout: Duration::from_secs(10),
            location_timeout: Duration::from_secs(10),
            toast_duration: Duration::from_secs(4),
        }
    }
}

impl AppConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn with_deny_location(mut self, deny: bool) -> Self {
        self.deny_location = deny;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(placeholder) = lookup(ENV_PLACEHOLDER).filter(|s| !s.trim().is_empty()) {
            config.placeholder = placeholder;
        }

        let lat = lookup(ENV_LAT)
            .map(|v| parse_f64(ENV_LAT, &v))
            .transpose()?;
        let lon = lookup(ENV_LON)
            .map(|v| parse_f64(ENV_LON, &v))
            .transpose()?;
        config.coordinates = coordinates_from_parts(lat, lon)?;

        if let Some(value) = lookup(ENV_DENY_LOCATION) {
            config.deny_location = parse_flag(ENV_DENY_LOCATION, &value)?;
        }
        if let Some(value) = lookup(ENV_LATENCY_MS) {
            config.latency = Duration::from_millis(parse_u64(ENV_LATENCY_MS, &value)?);
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed = Some(parse_u64(ENV_SEED, &value)?);
        }
        if let Some(value) = lookup(ENV_FAILURE_RATE) {
            config.failure_rate = parse_f64(ENV_FAILURE_RATE, &value)?;
        }
        if let Some(value) = lookup(ENV_TOAST_MS) {
            let millis = parse_u64(ENV_TOAST_MS, &value)?;
            config = config.with_toast_duration(Duration::from_millis(millis));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check ranges that the builders do not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(coords) = self.coordinates {
            if !coords.is_valid() {
                return Err(ConfigError::CoordinatesOutOfRange {
                    latitude: coords.latitude,
                    longitude: coords.longitude,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::invalid(
                "failure rate",
                &self.failure_rate.to_string(),
                "must be between 0 and 1",
            ));
        }
        if self.toast_duration.is_zero() {
            return Err(ConfigError::invalid(
                "toast duration",
                "0",
                "must be at least 1 ms",
            ));
        }
        if self.aqi_range.is_empty() {
            return Err(ConfigError::invalid(
                "aqi range",
                &format!("{:?}", self.aqi_range),
                "range is empty",
            ));
        }
        Ok(())
    }

    pub fn refresh_settings(&self) -> RefreshSettings {
        RefreshSettings::default()
            .with_placeholder(self.placeholder.clone())
            .with_fetch_timeout(self.fetch_timeout)
            .with_location_timeout(self.location_timeout)
    }

    pub fn build_source(&self) -> SimulatedSource {
        let source = SimulatedSource::new()
            .with_latency(self.latency)
            .with_aqi_range(self.aqi_range.clone())
            .with_failure_rate(self.failure_rate);

        match self.seed {
            Some(seed) => source.with_seed(seed),
            None => source,
        }
    }

    pub fn build_location(&self) -> ConfiguredLocation {
        ConfiguredLocation::new(self.coordinates, self.deny_location)
    }
}

/// Pair optional latitude/longitude values; one without the other is an error.
pub fn coordinates_from_parts(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinates>, ConfigError> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Ok(Some(Coordinates::new(lat, lon))),
        (None, None) => Ok(None),
        _ => Err(ConfigError::IncompleteCoordinates),
    }
}

pub(crate) fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::invalid(key, value, "expected a number"))
}

pub(crate) fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::invalid(key, value, "expected a non-negative integer"))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "expected true or false")),
    }
}
