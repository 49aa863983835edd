//! The air-quality reading shown on the dashboard.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::aqi::{classify_level, classify_tier, DisplayTier, Pollutant, QualityLevel};
use crate::models::Coordinates;

/// Location label used when no coordinates are available.
pub const DEFAULT_LOCATION_LABEL: &str = "Your Location";

/// Pollutant concentrations. Each species is optional and independent of the AQI.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pollutants {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub co: Option<f64>,
}

impl Pollutants {
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
        }
    }
}

/// Raw values returned by a data source, before classification and labelling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub aqi: u32,
    #[serde(flatten)]
    pub pollutants: Pollutants,
}

/// A complete reading.
///
/// Fields are private so `quality_level` can only ever be derived from `aqi`.
/// A reading is replaced wholesale on every successful refresh, never edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    aqi: u32,
    quality_level: QualityLevel,
    location: String,
    pollutants: Pollutants,
    coordinates: Option<Coordinates>,
    updated_at: DateTime<Local>,
}

impl Reading {
    /// Build a reading from a measurement.
    ///
    /// The location label is the formatted coordinates when present, the
    /// placeholder otherwise.
    pub fn new(
        measurement: Measurement,
        coordinates: Option<Coordinates>,
        placeholder: &str,
    ) -> Self {
        let location = coordinates
            .map(|c| c.label())
            .unwrap_or_else(|| placeholder.to_string());

        Self {
            aqi: measurement.aqi,
            quality_level: classify_level(measurement.aqi as f64),
            location,
            pollutants: measurement.pollutants,
            coordinates,
            updated_at: Local::now(),
        }
    }

    /// The reading shown before the first refresh completes.
    pub fn placeholder(label: &str) -> Self {
        let measurement = Measurement {
            aqi: 85,
            pollutants: Pollutants {
                pm25: Some(35.4),
                pm10: Some(50.2),
                no2: Some(40.5),
                o3: Some(60.3),
                co: Some(500.0),
            },
        };
        Self::new(measurement, None, label)
    }

    pub fn aqi(&self) -> u32 {
        self.aqi
    }

    pub fn quality_level(&self) -> QualityLevel {
        self.quality_level
    }

    pub fn display_tier(&self) -> DisplayTier {
        classify_tier(self.aqi as f64)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn pollutants(&self) -> &Pollutants {
        &self.pollutants
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn updated_at(&self) -> DateTime<Local> {
        self.updated_at
    }

    /// One-line summary, e.g. `Current AQI: 42 - Good`.
    pub fn summary(&self) -> String {
        format!("Current AQI: {} - {}", self.aqi, self.quality_level)
    }
}
