//! End-to-end: a refresh cycle drives what the dashboard draws.

mod common;

use aqmon::adapters::mock::{MockLocationProvider, MockSource};
use aqmon::app::AppMessage;
use aqmon::models::Notification;
use aqmon::ui;
use common::{full_measurement, Harness};
use ratatui::{backend::TestBackend, Terminal};

fn screen(app: &aqmon::app::App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_refresh_updates_rendered_dashboard() {
    let source = MockSource::returning(10);
    source.push(Ok(full_measurement(320)));
    let h = Harness::new(source, MockLocationProvider::granted(12.34, 56.78));
    let mut app = h.app();

    let before = screen(&app);
    assert!(before.contains("Your Location"));
    assert!(before.contains("Moderate"));

    h.controller.locate_and_refresh().await.unwrap();
    app.apply_snapshot(h.controller.snapshot());
    app.handle_message(AppMessage::Notify(h.notifier.last().unwrap()));

    let after = screen(&app);
    assert!(after.contains("12.34°, 56.78°"));
    assert!(after.contains("Hazardous"));
    assert!(after.contains("⚠"));
    assert!(after.contains("Air quality updated"));
}

#[tokio::test]
async fn test_busy_spinner_shown_mid_cycle() {
    let h = Harness::new(MockSource::returning(10).gated(), MockLocationProvider::denied());
    let mut app = h.app();
    let mut rx = h.controller.subscribe();

    assert!(app.request_refresh());
    rx.wait_for(|s| s.busy).await.unwrap();
    app.apply_snapshot(h.controller.snapshot());
    assert!(screen(&app).contains("Refreshing"));

    h.source.release();
    rx.wait_for(|s| !s.busy).await.unwrap();
    app.apply_snapshot(h.controller.snapshot());
    assert!(screen(&app).contains("[r] Refresh"));
}

#[test]
fn test_destructive_toast_rendered() {
    let h = Harness::new(MockSource::returning(10), MockLocationProvider::denied());
    let mut app = h.app();
    app.handle_message(AppMessage::Notify(Notification::destructive(
        "Error fetching data",
        "Could not retrieve air quality information",
    )));
    assert!(screen(&app).contains("Error fetching data"));
}
