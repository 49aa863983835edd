//! The refresh controller.
//!
//! One cycle: mark busy, optionally ask for a position, fetch a measurement,
//! classify it, publish the new reading, notify, clear busy. Failures never
//! escape; they end in a notification and an unchanged reading.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::busy::BusyGuard;
use super::snapshot::DashboardSnapshot;
use crate::error::{LocationError, SourceError};
use crate::models::{Coordinates, Measurement, Notification, Reading, DEFAULT_LOCATION_LABEL};
use crate::traits::{AirQualitySource, LocationProvider, Notifier};

/// Title of the success toast.
pub const UPDATED_TITLE: &str = "Air quality updated";

/// Title of the data-retrieval failure toast.
pub const FETCH_FAILED_TITLE: &str = "Error fetching data";

/// Description of the location fallback toast.
pub const FALLBACK_DESCRIPTION: &str = "Using default location";

/// Tunables for a refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshSettings {
    /// Location label when no coordinates are available.
    pub placeholder: String,
    /// Upper bound on a single data-source call.
    pub fetch_timeout: Duration,
    /// Upper bound on a single location request.
    pub location_timeout: Duration,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_LOCATION_LABEL.to_string(),
            fetch_timeout: Duration::from_secs(10),
            location_timeout: Duration::from_secs(10),
        }
    }
}

impl RefreshSettings {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_location_timeout(mut self, timeout: Duration) -> Self {
        self.location_timeout = timeout;
        self
    }
}

/// Owns the live [`DashboardSnapshot`] and runs refresh cycles against it.
///
/// Share it as `Arc<RefreshController>`; at most one cycle runs at a time.
pub struct RefreshController {
    source: Arc<dyn AirQualitySource>,
    location: Arc<dyn LocationProvider>,
    notifier: Arc<dyn Notifier>,
    settings: RefreshSettings,
    state: Arc<watch::Sender<DashboardSnapshot>>,
}

impl RefreshController {
    /// Create a controller whose live reading is the startup placeholder.
    pub fn new(
        source: Arc<dyn AirQualitySource>,
        location: Arc<dyn LocationProvider>,
        notifier: Arc<dyn Notifier>,
        settings: RefreshSettings,
    ) -> Self {
        let initial = DashboardSnapshot::idle(Reading::placeholder(&settings.placeholder));
        let (state, _) = watch::channel(initial);

        Self {
            source,
            location,
            notifier,
            settings,
            state: Arc::new(state),
        }
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.borrow().clone()
    }

    pub fn current_reading(&self) -> Reading {
        self.state.borrow().reading.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Produce a new reading for the given coordinates.
    ///
    /// Returns the live reading after the cycle: the new one on success, the
    /// previous one on failure. If another cycle is in flight this does
    /// nothing and returns the current reading.
    pub async fn refresh(&self, coordinates: Option<Coordinates>) -> Reading {
        match BusyGuard::acquire(&self.state) {
            Some(guard) => self
                .run_cycle(&guard, coordinates)
                .await
                .unwrap_or_else(|_| self.current_reading()),
            None => {
                tracing::debug!("Refresh skipped: a cycle is already in flight");
                self.current_reading()
            }
        }
    }

    /// Ask for the current position, then refresh.
    ///
    /// Returns `None` without doing anything while busy. The busy flag covers
    /// the location request as well as the fetch.
    pub async fn locate_and_refresh(&self) -> Option<Reading> {
        self.try_locate_and_refresh()
            .await
            .map(|outcome| outcome.unwrap_or_else(|_| self.current_reading()))
    }

    /// Like [`RefreshController::locate_and_refresh`], but reports whether
    /// the fetch succeeded instead of falling back to the live reading.
    ///
    /// Notifications and the published state are the same either way.
    pub async fn try_locate_and_refresh(&self) -> Option<Result<Reading, SourceError>> {
        let Some(guard) = BusyGuard::acquire(&self.state) else {
            tracing::debug!("Manual refresh ignored: a cycle is already in flight");
            return None;
        };
        Some(self.locate_with(&guard).await)
    }

    /// Run a locate-and-refresh cycle on the runtime.
    ///
    /// The busy flag is taken before spawning, so a second call made before
    /// the first task gets polled already returns `None`.
    pub fn spawn_locate_and_refresh(self: &Arc<Self>) -> Option<JoinHandle<Option<Reading>>> {
        let Some(guard) = BusyGuard::acquire(&self.state) else {
            tracing::debug!("Manual refresh ignored: a cycle is already in flight");
            return None;
        };
        let controller = Arc::clone(self);
        Some(tokio::spawn(async move {
            let reading = controller
                .locate_with(&guard)
                .await
                .unwrap_or_else(|_| controller.current_reading());
            Some(reading)
        }))
    }

    async fn locate_with(&self, busy: &BusyGuard) -> Result<Reading, SourceError> {
        let coordinates = self.locate().await;
        self.run_cycle(busy, coordinates).await
    }

    async fn locate(&self) -> Option<Coordinates> {
        let timeout = self.settings.location_timeout;
        let result = match tokio::time::timeout(timeout, self.location.current_position()).await {
            Ok(result) => result,
            Err(_) => Err(LocationError::Unavailable(format!(
                "no answer within {}ms",
                timeout.as_millis()
            ))),
        };

        match result {
            Ok(coordinates) => {
                tracing::debug!(%coordinates, "Location granted");
                Some(coordinates)
            }
            Err(err) => {
                tracing::info!(code = err.error_code(), "Falling back to default location: {}", err);
                self.notifier
                    .publish(Notification::new(err.title(), FALLBACK_DESCRIPTION));
                None
            }
        }
    }

    async fn fetch(&self, coordinates: Option<Coordinates>) -> Result<Measurement, SourceError> {
        let timeout = self.settings.fetch_timeout;
        match tokio::time::timeout(timeout, self.source.fetch(coordinates)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                duration_ms: timeout.as_millis() as u64,
            }),
        }
    }

    async fn run_cycle(
        &self,
        _busy: &BusyGuard,
        coordinates: Option<Coordinates>,
    ) -> Result<Reading, SourceError> {
        match self.fetch(coordinates).await {
            Ok(measurement) => {
                let reading = Reading::new(measurement, coordinates, &self.settings.placeholder);
                self.state
                    .send_modify(|snapshot| snapshot.reading = reading.clone());

                tracing::info!(
                    aqi = reading.aqi(),
                    level = %reading.quality_level(),
                    location = reading.location(),
                    "Published new reading"
                );
                self.notifier
                    .publish(Notification::new(UPDATED_TITLE, reading.summary()));
                Ok(reading)
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    "Refresh failed: {}",
                    err
                );
                self.notifier
                    .publish(Notification::destructive(FETCH_FAILED_TITLE, err.user_message()));
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshController")
            .field("settings", &self.settings)
            .field("snapshot", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockLocationProvider, MockSource, RecordingNotifier};
    use crate::aqi::QualityLevel;
    use crate::models::Severity;

    fn controller(
        source: MockSource,
        location: MockLocationProvider,
    ) -> (RefreshController, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let controller = RefreshController::new(
            Arc::new(source),
            Arc::new(location),
            Arc::new(notifier.clone()),
            RefreshSettings::default(),
        );
        (controller, notifier)
    }

    #[test]
    fn test_starts_idle_with_placeholder() {
        let (ctrl, _) = controller(MockSource::returning(10), MockLocationProvider::denied());
        let snapshot = ctrl.snapshot();
        assert!(!snapshot.busy);
        assert_eq!(snapshot.reading.aqi(), 85);
        assert_eq!(snapshot.reading.location(), DEFAULT_LOCATION_LABEL);
    }

    #[tokio::test]
    async fn test_refresh_success_publishes_and_notifies() {
        let (ctrl, notifier) = controller(MockSource::returning(42), MockLocationProvider::denied());

        let reading = ctrl.refresh(None).await;

        assert_eq!(reading.aqi(), 42);
        assert_eq!(reading.quality_level(), QualityLevel::Good);
        assert_eq!(ctrl.current_reading(), reading);
        assert!(!ctrl.is_busy());

        let n = notifier.last().unwrap();
        assert_eq!(n.title, UPDATED_TITLE);
        assert_eq!(n.description, "Current AQI: 42 - Good");
        assert_eq!(n.severity, Severity::Normal);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_reading() {
        let (ctrl, notifier) = controller(
            MockSource::failing(SourceError::Malformed("no aqi field".to_string())),
            MockLocationProvider::denied(),
        );
        let before = ctrl.current_reading();

        let after = ctrl.refresh(None).await;

        assert_eq!(after, before);
        assert_eq!(ctrl.current_reading(), before);
        assert!(!ctrl.is_busy());
        let n = notifier.last().unwrap();
        assert_eq!(n.title, FETCH_FAILED_TITLE);
        assert_eq!(n.description, "Could not retrieve air quality information");
        assert!(n.is_destructive());
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_a_failure() {
        let notifier = RecordingNotifier::new();
        let ctrl = RefreshController::new(
            Arc::new(MockSource::returning(10).with_delay(Duration::from_millis(200))),
            Arc::new(MockLocationProvider::denied()),
            Arc::new(notifier.clone()),
            RefreshSettings::default().with_fetch_timeout(Duration::from_millis(10)),
        );

        let reading = ctrl.refresh(None).await;

        assert_eq!(reading.aqi(), 85);
        assert_eq!(notifier.last().unwrap().title, FETCH_FAILED_TITLE);
        assert!(!ctrl.is_busy());
    }

    #[tokio::test]
    async fn test_location_timeout_falls_back() {
        let notifier = RecordingNotifier::new();
        let source = MockSource::returning(60);
        let ctrl = RefreshController::new(
            Arc::new(source.clone()),
            Arc::new(MockLocationProvider::granted(1.0, 2.0).with_delay(Duration::from_millis(200))),
            Arc::new(notifier.clone()),
            RefreshSettings::default().with_location_timeout(Duration::from_millis(10)),
        );

        let reading = ctrl.locate_and_refresh().await.unwrap();

        assert_eq!(reading.location(), DEFAULT_LOCATION_LABEL);
        assert_eq!(source.requests(), vec![None]);
        assert_eq!(notifier.titles(), vec!["Location unavailable", UPDATED_TITLE]);
    }

    #[tokio::test]
    async fn test_custom_placeholder() {
        let notifier = RecordingNotifier::new();
        let ctrl = RefreshController::new(
            Arc::new(MockSource::returning(10)),
            Arc::new(MockLocationProvider::denied()),
            Arc::new(notifier),
            RefreshSettings::default().with_placeholder("Home"),
        );

        assert_eq!(ctrl.current_reading().location(), "Home");
        let reading = ctrl.locate_and_refresh().await.unwrap();
        assert_eq!(reading.location(), "Home");
        assert!(reading.coordinates().is_none());
    }

    #[tokio::test]
    async fn test_try_locate_and_refresh_reports_failure() {
        let (ctrl, notifier) = controller(
            MockSource::failing(SourceError::Malformed("no aqi field".to_string())),
            MockLocationProvider::denied(),
        );

        let outcome = ctrl.try_locate_and_refresh().await.unwrap();

        assert!(matches!(outcome, Err(SourceError::Malformed(_))));
        assert_eq!(ctrl.current_reading().aqi(), 85);
        assert_eq!(notifier.last().unwrap().title, FETCH_FAILED_TITLE);
        assert!(!ctrl.is_busy());
    }

    #[tokio::test]
    async fn test_second_spawn_before_first_runs_is_rejected() {
        let (ctrl, _) = controller(MockSource::returning(30), MockLocationProvider::denied());
        let ctrl = Arc::new(ctrl);

        let first = ctrl.spawn_locate_and_refresh().unwrap();
        assert!(ctrl.is_busy());
        assert!(ctrl.spawn_locate_and_refresh().is_none());

        let reading = first.await.unwrap().unwrap();
        assert_eq!(reading.aqi(), 30);
        assert!(!ctrl.is_busy());
    }
}
