//! Mock air-quality source for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

use crate::error::SourceError;
use crate::models::{Coordinates, Measurement, Pollutants};
use crate::traits::AirQualitySource;

/// Source returning scripted outcomes.
///
/// Queued outcomes are consumed first; afterwards the fallback is returned.
/// A gated source blocks every fetch until [`MockSource::release`] is called,
/// which lets tests observe the controller mid-cycle.
#[derive(Debug, Clone)]
pub struct MockSource {
    queue: Arc<Mutex<VecDeque<Result<Measurement, SourceError>>>>,
    fallback: Result<Measurement, SourceError>,
    delay: Option<Duration>,
    gate: Option<Arc<Semaphore>>,
    requests: Arc<Mutex<Vec<Option<Coordinates>>>>,
}

impl MockSource {
    /// Always answer with this AQI and no pollutant values.
    pub fn returning(aqi: u32) -> Self {
        Self::with_fallback(Ok(Measurement {
            aqi,
            pollutants: Pollutants::default(),
        }))
    }

    /// Always fail with this error.
    pub fn failing(error: SourceError) -> Self {
        Self::with_fallback(Err(error))
    }

    pub fn with_fallback(fallback: Result<Measurement, SourceError>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            delay: None,
            gate: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a one-off outcome ahead of the fallback.
    pub fn push(&self, outcome: Result<Measurement, SourceError>) {
        self.queue.lock().unwrap().push_back(outcome);
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Block each fetch until a matching [`MockSource::release`].
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Let one blocked (or future) fetch proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Coordinates passed to each fetch, oldest first.
    pub fn requests(&self) -> Vec<Option<Coordinates>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AirQualitySource for MockSource {
    async fn fetch(&self, coordinates: Option<Coordinates>) -> Result<Measurement, SourceError> {
        self.requests.lock().unwrap().push(coordinates);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|_| SourceError::Unavailable("gate closed".to_string()))?
                .forget();
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.queue.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| self.fallback.clone())
    }
}
