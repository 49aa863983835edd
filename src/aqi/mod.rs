//! AQI classification.
//!
//! Maps a numeric Air Quality Index to:
//! - [`QualityLevel`] - the severity label shown to the user
//! - [`DisplayTier`] - the styling tier consumed by the UI theme
//!
//! Both lookups go through the single boundary table in [`bands`], so the two
//! can never disagree on bucket membership.

pub mod bands;
pub mod pollutant;

pub use bands::{band_index, AQI_BANDS, BAND_COUNT};
pub use pollutant::Pollutant;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity category derived solely from an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl QualityLevel {
    /// All levels, ordered by band index.
    pub const ALL: [QualityLevel; BAND_COUNT] = [
        QualityLevel::Good,
        QualityLevel::Moderate,
        QualityLevel::UnhealthyForSensitiveGroups,
        QualityLevel::Unhealthy,
        QualityLevel::VeryUnhealthy,
        QualityLevel::Hazardous,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Good => "Good",
            QualityLevel::Moderate => "Moderate",
            QualityLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            QualityLevel::Unhealthy => "Unhealthy",
            QualityLevel::VeryUnhealthy => "Very Unhealthy",
            QualityLevel::Hazardous => "Hazardous",
        }
    }

    /// Whether the dashboard should show the alert banner for this level.
    pub fn is_alert(&self) -> bool {
        *self >= QualityLevel::UnhealthyForSensitiveGroups
    }

    /// Short banner headline for this level.
    pub fn headline(&self) -> &'static str {
        match self {
            QualityLevel::Good => "Air quality is satisfactory",
            QualityLevel::Moderate => "Air quality is acceptable",
            QualityLevel::UnhealthyForSensitiveGroups => "Sensitive groups may be affected",
            QualityLevel::Unhealthy => "Everyone may begin to feel health effects",
            QualityLevel::VeryUnhealthy => "Health alert: risk is increased for everyone",
            QualityLevel::Hazardous => "Health warning: emergency conditions",
        }
    }

    /// Health tips shown next to the gauge.
    pub fn health_advice(&self) -> &'static [&'static str] {
        match self {
            QualityLevel::Good => &[
                "Great day to be active outside",
                "Open windows to let fresh air in",
            ],
            QualityLevel::Moderate => &[
                "Unusually sensitive people should limit prolonged outdoor exertion",
                "Outdoor activity is fine for most people",
            ],
            QualityLevel::UnhealthyForSensitiveGroups => &[
                "Children, older adults and people with asthma should reduce outdoor exertion",
                "Keep quick-relief medicine handy",
                "Consider moving workouts indoors",
            ],
            QualityLevel::Unhealthy => &[
                "Avoid prolonged or heavy outdoor exertion",
                "Keep windows closed",
                "Run an air purifier if you have one",
            ],
            QualityLevel::VeryUnhealthy => &[
                "Avoid all outdoor physical activity",
                "Wear an N95 mask if you must go outside",
                "Keep indoor air clean and windows closed",
            ],
            QualityLevel::Hazardous => &[
                "Stay indoors and keep activity levels low",
                "Follow local health advisories",
                "Seek medical help if you have trouble breathing",
            ],
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Styling tier for the dashboard, one per AQI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayTier {
    Fresh,
    Fair,
    Caution,
    Poor,
    Severe,
    Critical,
}

impl DisplayTier {
    /// All tiers, ordered by band index.
    pub const ALL: [DisplayTier; BAND_COUNT] = [
        DisplayTier::Fresh,
        DisplayTier::Fair,
        DisplayTier::Caution,
        DisplayTier::Poor,
        DisplayTier::Severe,
        DisplayTier::Critical,
    ];
}

/// Classify an AQI value into its quality level.
///
/// Total over every `f64`: negatives are `Good`, NaN and anything above 300
/// are `Hazardous`.
pub fn classify_level(aqi: f64) -> QualityLevel {
    QualityLevel::ALL[band_index(aqi)]
}

/// Classify an AQI value into its display tier.
pub fn classify_tier(aqi: f64) -> DisplayTier {
    DisplayTier::ALL[band_index(aqi)]
}
