//! Simulated air-quality source.
//!
//! Waits for a fixed latency, then returns an AQI drawn uniformly from the
//! configured range and independently drawn pollutant concentrations, each in
//! `[0, Pollutant::demo_max())`. A failure rate can be set to exercise the
//! error path.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Mutex;
use std::time::Duration;

use crate::aqi::Pollutant;
use crate::error::SourceError;
use crate::models::{Coordinates, Measurement, Pollutants};
use crate::traits::AirQualitySource;

/// Default simulated round-trip time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Default AQI range (20 to 319 inclusive).
pub const DEFAULT_AQI_RANGE: Range<u32> = 20..320;

/// Random data source standing in for a real provider.
#[derive(Debug)]
pub struct SimulatedSource {
    latency: Duration,
    aqi_range: Range<u32>,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedSource {
    /// Create a source with default latency and range, seeded from entropy.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            aqi_range: DEFAULT_AQI_RANGE,
            failure_rate: 0.0,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Use a deterministic generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Probability in `[0, 1]` that a fetch fails. Out-of-range values are clamped.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// AQI range to draw from. Empty ranges fall back to the default.
    pub fn with_aqi_range(mut self, range: Range<u32>) -> Self {
        if !range.is_empty() {
            self.aqi_range = range;
        }
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn generate(&self) -> Result<Measurement, SourceError> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        if self.failure_rate > 0.0 && rng.gen_bool(self.failure_rate) {
            return Err(SourceError::Unavailable(
                "simulated provider failure".to_string(),
            ));
        }

        let aqi = rng.gen_range(self.aqi_range.clone());
        let mut sample = |p: Pollutant| Some(rng.gen::<f64>() * p.demo_max());

        Ok(Measurement {
            aqi,
            pollutants: Pollutants {
                pm25: sample(Pollutant::Pm25),
                pm10: sample(Pollutant::Pm10),
                no2: sample(Pollutant::No2),
                o3: sample(Pollutant::O3),
                co: sample(Pollutant::Co),
            },
        })
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirQualitySource for SimulatedSource {
    async fn fetch(&self, coordinates: Option<Coordinates>) -> Result<Measurement, SourceError> {
        tracing::debug!(?coordinates, latency_ms = self.latency.as_millis() as u64, "simulating fetch");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_values_within_demo_ranges() {
        let source = SimulatedSource::new()
            .with_latency(Duration::ZERO)
            .with_seed(7);

        for _ in 0..200 {
            let m = source.fetch(None).await.unwrap();
            assert!(DEFAULT_AQI_RANGE.contains(&m.aqi), "aqi {} out of range", m.aqi);
            for p in Pollutant::ALL {
                let value = m.pollutants.get(p).unwrap();
                assert!(value >= 0.0 && value < p.demo_max(), "{:?} = {}", p, value);
            }
        }
    }

    #[tokio::test]
    async fn test_seed_is_deterministic() {
        let a = SimulatedSource::new().with_latency(Duration::ZERO).with_seed(42);
        let b = SimulatedSource::new().with_latency(Duration::ZERO).with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.fetch(None).await.unwrap(), b.fetch(None).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_failure_rate_one_always_fails() {
        let source = SimulatedSource::new()
            .with_latency(Duration::ZERO)
            .with_failure_rate(1.0);

        let result = source.fetch(None).await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_custom_range() {
        let source = SimulatedSource::new()
            .with_latency(Duration::ZERO)
            .with_seed(1)
            .with_aqi_range(400..401);

        assert_eq!(source.fetch(None).await.unwrap().aqi, 400);
    }

    #[test]
    fn test_builder_clamps_and_ignores_empty_range() {
        let source = SimulatedSource::new()
            .with_failure_rate(3.0)
            .with_aqi_range(10..10);
        assert_eq!(source.failure_rate, 1.0);
        assert_eq!(source.aqi_range, DEFAULT_AQI_RANGE);
        assert_eq!(source.latency(), DEFAULT_LATENCY);
    }
}
