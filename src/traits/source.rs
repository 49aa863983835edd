//! Air-quality data source trait abstraction.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{Coordinates, Measurement};

/// Provider of raw air-quality measurements.
///
/// This is the only place latency and data generation live; the classifier
/// and state handling never see how a measurement was produced.
///
/// # Example
///
/// ```ignore
/// use aqmon::traits::AirQualitySource;
///
/// async fn current_aqi<S: AirQualitySource>(source: &S) -> Option<u32> {
///     source.fetch(None).await.ok().map(|m| m.aqi)
/// }
/// ```
#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Fetch a measurement for the given position, or for an unspecified
    /// default position when `coordinates` is `None`.
    async fn fetch(&self, coordinates: Option<Coordinates>) -> Result<Measurement, SourceError>;
}
