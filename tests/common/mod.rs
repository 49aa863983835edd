//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::Harness;
//!
//! let h = Harness::new(MockSource::returning(42), MockLocationProvider::denied());
//! h.controller.locate_and_refresh().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use aqmon::adapters::mock::{MockLocationProvider, MockSource, RecordingNotifier};
use aqmon::app::App;
use aqmon::models::{Measurement, Pollutants};
use aqmon::refresh::{RefreshController, RefreshSettings};
use tokio::sync::mpsc;

/// A controller wired to mocks, with handles kept for assertions.
pub struct Harness {
    pub controller: Arc<RefreshController>,
    pub source: MockSource,
    pub location: MockLocationProvider,
    pub notifier: RecordingNotifier,
}

impl Harness {
    pub fn new(source: MockSource, location: MockLocationProvider) -> Self {
        Self::with_settings(source, location, RefreshSettings::default())
    }

    pub fn with_settings(
        source: MockSource,
        location: MockLocationProvider,
        settings: RefreshSettings,
    ) -> Self {
        let notifier = RecordingNotifier::new();
        let controller = Arc::new(RefreshController::new(
            Arc::new(source.clone()),
            Arc::new(location.clone()),
            Arc::new(notifier.clone()),
            settings,
        ));
        Self {
            controller,
            source,
            location,
            notifier,
        }
    }

    /// An [`App`] on top of this harness's controller.
    pub fn app(&self) -> App {
        let (_tx, rx) = mpsc::unbounded_channel();
        App::new(Arc::clone(&self.controller), rx, Duration::from_secs(4))
    }
}

/// A measurement with every pollutant present.
pub fn full_measurement(aqi: u32) -> Measurement {
    Measurement {
        aqi,
        pollutants: Pollutants {
            pm25: Some(12.0),
            pm10: Some(20.0),
            no2: Some(30.0),
            o3: Some(40.0),
            co: Some(400.0),
        },
    }
}
