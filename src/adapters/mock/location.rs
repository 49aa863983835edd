//! Mock location provider for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::LocationError;
use crate::models::Coordinates;
use crate::traits::LocationProvider;

/// Location provider returning a fixed result and counting requests.
#[derive(Debug, Clone)]
pub struct MockLocationProvider {
    result: Result<Coordinates, LocationError>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockLocationProvider {
    pub fn granted(latitude: f64, longitude: f64) -> Self {
        Self::with_result(Ok(Coordinates::new(latitude, longitude)))
    }

    pub fn denied() -> Self {
        Self::with_result(Err(LocationError::Denied))
    }

    pub fn unavailable() -> Self {
        Self::with_result(Err(LocationError::Unavailable(
            "geolocation not supported".to_string(),
        )))
    }

    pub fn with_result(result: Result<Coordinates, LocationError>) -> Self {
        Self {
            result,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of position requests received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
