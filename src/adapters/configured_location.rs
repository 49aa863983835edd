//! Location provider backed by configuration.
//!
//! A terminal has no geolocation prompt, so the position comes from
//! `--lat/--lon` (or `AQMON_LAT`/`AQMON_LON`). `--deny-location` simulates a
//! refused permission; no coordinates at all means the capability is absent.

use async_trait::async_trait;

use crate::error::LocationError;
use crate::models::Coordinates;
use crate::traits::LocationProvider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfiguredLocation {
    /// Answer with these coordinates.
    Granted(Coordinates),
    /// Refuse access.
    Denied,
    /// No position is known.
    Unavailable,
}

impl ConfiguredLocation {
    /// Build from optional coordinates and a deny flag. The flag wins.
    pub fn new(coordinates: Option<Coordinates>, deny: bool) -> Self {
        match (deny, coordinates) {
            (true, _) => ConfiguredLocation::Denied,
            (false, Some(coords)) => ConfiguredLocation::Granted(coords),
            (false, None) => ConfiguredLocation::Unavailable,
        }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        match self {
            ConfiguredLocation::Granted(coords) => Ok(*coords),
            ConfiguredLocation::Denied => Err(LocationError::Denied),
            ConfiguredLocation::Unavailable => Err(LocationError::Unavailable(
                "no coordinates configured".to_string(),
            )),
        }
    }
}
