//! Refresh cycle integration tests: busy flag, fallback and notifications.

mod common;

use std::time::Duration;

use aqmon::adapters::mock::{MockLocationProvider, MockSource};
use aqmon::error::SourceError;
use aqmon::models::{Coordinates, Severity};
use aqmon::refresh::{RefreshSettings, FALLBACK_DESCRIPTION, FETCH_FAILED_TITLE, UPDATED_TITLE};
use common::{full_measurement, Harness};

#[tokio::test]
async fn test_busy_strictly_during_successful_cycle() {
    let h = Harness::new(MockSource::returning(42).gated(), MockLocationProvider::denied());
    let mut rx = h.controller.subscribe();
    assert!(!h.controller.is_busy());

    let task = h.controller.spawn_locate_and_refresh().unwrap();
    rx.wait_for(|s| s.busy).await.unwrap();
    assert!(h.controller.is_busy());

    h.source.release();
    let reading = task.await.unwrap().unwrap();
    assert!(!h.controller.is_busy());
    assert_eq!(reading.aqi(), 42);
}

#[tokio::test]
async fn test_busy_strictly_during_failed_cycle() {
    let h = Harness::new(
        MockSource::failing(SourceError::HttpStatus {
            status: 503,
            message: "down".to_string(),
        })
        .gated(),
        MockLocationProvider::denied(),
    );
    let mut rx = h.controller.subscribe();

    let task = h.controller.spawn_locate_and_refresh().unwrap();
    rx.wait_for(|s| s.busy).await.unwrap();

    h.source.release();
    let reading = task.await.unwrap().unwrap();
    assert!(!h.controller.is_busy());
    assert_eq!(reading.aqi(), 85);
}

#[tokio::test]
async fn test_location_denied_uses_placeholder() {
    let h = Harness::new(MockSource::returning(30), MockLocationProvider::denied());

    let reading = h.controller.locate_and_refresh().await.unwrap();

    assert_eq!(reading.location(), "Your Location");
    assert!(reading.coordinates().is_none());
    assert_eq!(h.source.requests(), vec![None]);

    let notes = h.notifier.notifications();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Location access denied");
    assert_eq!(notes[0].description, FALLBACK_DESCRIPTION);
    assert_eq!(notes[0].severity, Severity::Normal);
    assert_eq!(notes[1].title, UPDATED_TITLE);
}

#[tokio::test]
async fn test_location_unavailable_uses_placeholder() {
    let h = Harness::new(MockSource::returning(30), MockLocationProvider::unavailable());

    let reading = h.controller.locate_and_refresh().await.unwrap();

    assert_eq!(reading.location(), "Your Location");
    assert_eq!(h.notifier.titles()[0], "Location unavailable");
}

#[tokio::test]
async fn test_location_granted_formats_coordinates() {
    let h = Harness::new(
        MockSource::returning(30),
        MockLocationProvider::granted(12.34, 56.78),
    );

    let reading = h.controller.locate_and_refresh().await.unwrap();

    assert_eq!(reading.location(), "12.34°, 56.78°");
    assert_eq!(reading.coordinates(), Some(Coordinates::new(12.34, 56.78)));
    assert_eq!(h.notifier.titles(), vec![UPDATED_TITLE]);
}

#[tokio::test]
async fn test_success_notification_text() {
    let h = Harness::new(MockSource::returning(120), MockLocationProvider::denied());

    h.controller.refresh(None).await;

    let last = h.notifier.last().unwrap();
    assert_eq!(last.title, "Air quality updated");
    assert_eq!(last.description, "Current AQI: 120 - Unhealthy for Sensitive Groups");
    assert_eq!(last.severity, Severity::Normal);
}

#[tokio::test]
async fn test_failure_keeps_previous_reading() {
    let source = MockSource::failing(SourceError::Malformed("missing aqi".to_string()));
    source.push(Ok(full_measurement(61)));
    let h = Harness::new(source, MockLocationProvider::denied());

    let first = h.controller.refresh(None).await;
    assert_eq!(first.aqi(), 61);

    let second = h.controller.refresh(None).await;
    assert_eq!(second, first);
    assert_eq!(h.controller.current_reading(), first);

    let last = h.notifier.last().unwrap();
    assert_eq!(last.title, FETCH_FAILED_TITLE);
    assert_eq!(last.description, "Could not retrieve air quality information");
    assert_eq!(last.severity, Severity::Destructive);
}

#[tokio::test]
async fn test_reentrant_trigger_is_noop() {
    let h = Harness::new(MockSource::returning(77).gated(), MockLocationProvider::denied());
    let mut rx = h.controller.subscribe();

    let task = h.controller.spawn_locate_and_refresh().unwrap();
    rx.wait_for(|s| s.busy).await.unwrap();

    assert!(h.controller.spawn_locate_and_refresh().is_none());
    assert!(h.controller.locate_and_refresh().await.is_none());
    assert_eq!(h.controller.refresh(None).await.aqi(), 85);

    h.source.release();
    task.await.unwrap();

    assert_eq!(h.source.requests().len(), 1);
    assert_eq!(h.location.call_count(), 1);
    assert_eq!(h.notifier.titles().iter().filter(|t| *t == UPDATED_TITLE).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_timeout_is_a_failure() {
    let settings = RefreshSettings::default().with_fetch_timeout(Duration::from_millis(50));
    let h = Harness::with_settings(
        MockSource::returning(10).with_delay(Duration::from_secs(5)),
        MockLocationProvider::denied(),
        settings,
    );

    let reading = h.controller.refresh(None).await;

    assert_eq!(reading.aqi(), 85);
    assert!(!h.controller.is_busy());
    assert_eq!(h.notifier.last().unwrap().title, FETCH_FAILED_TITLE);
}

#[tokio::test(start_paused = true)]
async fn test_slow_location_counts_as_unavailable() {
    let settings = RefreshSettings::default().with_location_timeout(Duration::from_millis(50));
    let h = Harness::with_settings(
        MockSource::returning(10),
        MockLocationProvider::granted(1.0, 2.0).with_delay(Duration::from_secs(5)),
        settings,
    );

    let reading = h.controller.locate_and_refresh().await.unwrap();

    assert_eq!(reading.location(), "Your Location");
    assert_eq!(h.notifier.titles()[0], "Location unavailable");
}

#[tokio::test]
async fn test_quality_level_always_matches_aqi() {
    let source = MockSource::returning(0);
    for aqi in [0, 50, 51, 100, 101, 150, 151, 200, 201, 300, 301, 500] {
        source.push(Ok(full_measurement(aqi)));
    }
    let h = Harness::new(source, MockLocationProvider::denied());

    for _ in 0..12 {
        let reading = h.controller.refresh(None).await;
        assert_eq!(
            reading.quality_level(),
            aqmon::aqi::classify_level(reading.aqi() as f64)
        );
    }
}

#[tokio::test]
async fn test_app_follows_controller_snapshot() {
    let h = Harness::new(MockSource::returning(250), MockLocationProvider::denied());
    let mut app = h.app();

    h.controller.refresh(None).await;
    app.apply_snapshot(h.controller.snapshot());

    assert_eq!(app.snapshot.reading.aqi(), 250);
    assert!(!app.is_busy());
}
