//! UI rendering for the air-quality dashboard.
//!
//! One screen, top to bottom:
//! - Header with title, location and refresh status
//! - Alert banner (only for levels from "Unhealthy for Sensitive Groups" up)
//! - Current AQI gauge with health tips, next to the pollutant table
//! - Footer with the time of the last update and keybinds
//!
//! A toast overlay in the bottom-right corner shows the latest notification.
//! Colors follow the reading's display tier.

mod components;
mod layout;
mod panels;
mod theme;
mod toast;

pub use layout::{gauge_ratio, should_stack, DashboardAreas};
pub use theme::tier_color;

use ratatui::Frame;

use crate::app::App;

/// Render the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let reading = &app.snapshot.reading;
    let areas = DashboardAreas::compute(frame.area(), reading.quality_level().is_alert());

    panels::render_header(frame, areas.header, app);
    panels::render_banner(frame, areas.banner, reading);
    panels::render_summary(frame, areas.summary, reading);
    panels::render_details(frame, areas.details, reading);
    panels::render_footer(frame, areas.footer, reading);

    if let Some(toast) = &app.toast {
        toast::render_toast(frame, toast);
    }
}
