//! Pollutant species tracked by a reading.

use serde::{Deserialize, Serialize};

/// A tracked pollutant species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
    O3,
    Co,
}

impl Pollutant {
    /// Display order used by the pollutant table.
    pub const ALL: [Pollutant; 5] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::Co,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO₂",
            Pollutant::O3 => "O₃",
            Pollutant::Co => "CO",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "Fine particulate matter",
            Pollutant::Pm10 => "Coarse particulate matter",
            Pollutant::No2 => "Nitrogen dioxide",
            Pollutant::O3 => "Ozone",
            Pollutant::Co => "Carbon monoxide",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::No2 | Pollutant::O3 | Pollutant::Co => "ppb",
        }
    }

    /// Exclusive upper bound of the simulated concentration range.
    /// Also the full-scale value of the dashboard bar.
    pub fn demo_max(&self) -> f64 {
        match self {
            Pollutant::Pm25 => 100.0,
            Pollutant::Pm10 => 150.0,
            Pollutant::No2 => 200.0,
            Pollutant::O3 => 150.0,
            Pollutant::Co => 1000.0,
        }
    }
}
