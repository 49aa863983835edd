//! Screen layout for the dashboard.
//!
//! Splits the terminal into header, optional alert banner, body and footer.
//! The body holds two panels side by side, stacked on narrow terminals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width below which the body panels stack vertically.
pub const STACK_BELOW_WIDTH: u16 = 80;

/// Full-scale AQI for the gauge.
pub const GAUGE_MAX_AQI: f64 = 500.0;

/// Areas of one dashboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    /// Zero height when no alert is shown
    pub banner: Rect,
    /// AQI gauge and health tips
    pub summary: Rect,
    /// Pollutant table
    pub details: Rect,
    pub footer: Rect,
}

impl DashboardAreas {
    pub fn compute(area: Rect, show_banner: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                 // Header
                Constraint::Length(if show_banner { 3 } else { 0 }), // Alert banner
                Constraint::Min(6),                                    // Body
                Constraint::Length(1),                                 // Footer
            ])
            .split(area);

        let direction = if should_stack(area.width) {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let body = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        Self {
            header: rows[0],
            banner: rows[1],
            summary: body[0],
            details: body[1],
            footer: rows[3],
        }
    }
}

pub fn should_stack(width: u16) -> bool {
    width < STACK_BELOW_WIDTH
}

/// Fill ratio of the AQI gauge, clamped to [0, 1].
pub fn gauge_ratio(aqi: u32) -> f64 {
    (f64::from(aqi) / GAUGE_MAX_AQI).clamp(0.0, 1.0)
}

/// Fill ratio of a pollutant bar against its full-scale value.
pub fn bar_ratio(value: f64, full_scale: f64) -> f64 {
    if full_scale <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / full_scale).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(0), 0.0);
        assert_eq!(gauge_ratio(250), 0.5);
        assert_eq!(gauge_ratio(500), 1.0);
        assert_eq!(gauge_ratio(900), 1.0);
    }

    #[test]
    fn test_bar_ratio() {
        assert_eq!(bar_ratio(50.0, 100.0), 0.5);
        assert_eq!(bar_ratio(-3.0, 100.0), 0.0);
        assert_eq!(bar_ratio(150.0, 100.0), 1.0);
        assert_eq!(bar_ratio(1.0, 0.0), 0.0);
        assert_eq!(bar_ratio(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_banner_collapses_when_hidden() {
        let area = Rect::new(0, 0, 100, 30);
        let hidden = DashboardAreas::compute(area, false);
        let shown = DashboardAreas::compute(area, true);
        assert_eq!(hidden.banner.height, 0);
        assert_eq!(shown.banner.height, 3);
        assert!(hidden.summary.height > shown.summary.height);
    }

    #[test]
    fn test_body_stacks_on_narrow_terminals() {
        let wide = DashboardAreas::compute(Rect::new(0, 0, 120, 30), false);
        assert_eq!(wide.summary.y, wide.details.y);

        let narrow = DashboardAreas::compute(Rect::new(0, 0, 60, 40), false);
        assert_eq!(narrow.summary.x, narrow.details.x);
        assert!(narrow.details.y > narrow.summary.y);
    }
}
