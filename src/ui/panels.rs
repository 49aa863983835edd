//! Dashboard panels
//!
//! Header, alert banner, AQI gauge with health tips, pollutant table and
//! footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::aqi::Pollutant;
use crate::models::Reading;

use super::components::render_refresh_status;
use super::layout::{bar_ratio, gauge_ratio};
use super::theme::{tier_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const BAR_WIDTH: usize = 16;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

// ============================================================================
// Header
// ============================================================================

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let reading = &app.snapshot.reading;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "Air Quality Monitor",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ◉ ", Style::default().fg(COLOR_DIM)),
        Span::styled(reading.location().to_string(), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);

    let status = render_refresh_status(app.is_busy(), app.tick_count as usize);
    frame.render_widget(
        Paragraph::new(status).alignment(ratatui::layout::Alignment::Right),
        columns[1],
    );
}

// ============================================================================
// Alert Banner
// ============================================================================

/// Alert text for readings that warrant one.
pub fn alert_line(reading: &Reading) -> Option<String> {
    let level = reading.quality_level();
    level
        .is_alert()
        .then(|| format!("⚠ {}: {}", level.label(), level.headline()))
}

pub fn render_banner(frame: &mut Frame, area: Rect, reading: &Reading) {
    let Some(text) = alert_line(reading) else {
        return;
    };
    let color = tier_color(reading.display_tier());
    let banner = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(banner, area);
}

// ============================================================================
// Summary: gauge + health tips
// ============================================================================

pub fn render_summary(frame: &mut Frame, area: Rect, reading: &Reading) {
    let block = panel("Current AQI");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Level label
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Tips
        ])
        .split(inner);

    let level = reading.quality_level();
    let color = tier_color(reading.display_tier());

    let label = Line::from(vec![
        Span::styled(
            format!("{} ", reading.aqi()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(level.label(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(label), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(gauge_ratio(reading.aqi()))
        .label(format!("{} / 500", reading.aqi()));
    frame.render_widget(gauge, rows[1]);

    let tips: Vec<Line> = level
        .health_advice()
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(*tip),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(tips).wrap(Wrap { trim: true }), rows[3]);
}

// ============================================================================
// Details: pollutant table
// ============================================================================

/// Text bar like `████░░░░` for a fill ratio.
pub fn bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `"35.4 µg/m³"`, or `"N/A"` when the value is missing.
pub fn format_concentration(value: Option<f64>, pollutant: Pollutant) -> String {
    match value {
        Some(v) => format!("{:.1} {}", v, pollutant.unit()),
        None => "N/A".to_string(),
    }
}

pub fn pollutant_lines(reading: &Reading) -> Vec<Line<'static>> {
    let color = tier_color(reading.display_tier());
    Pollutant::ALL
        .iter()
        .flat_map(|&pollutant| {
            let value = reading.pollutants().get(pollutant);
            let ratio = value.map_or(0.0, |v| bar_ratio(v, pollutant.demo_max()));
            [
                Line::from(vec![
                    Span::styled(
                        format!("{:<6}", pollutant.name()),
                        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(bar(ratio, BAR_WIDTH), Style::default().fg(color)),
                    Span::raw(format!(" {}", format_concentration(value, pollutant))),
                ]),
                Line::from(Span::styled(
                    format!("      {}", pollutant.description()),
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        })
        .collect()
}

pub fn render_details(frame: &mut Frame, area: Rect, reading: &Reading) {
    let paragraph = Paragraph::new(pollutant_lines(reading)).block(panel("Pollutants"));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Footer
// ============================================================================

pub fn footer_line(reading: &Reading) -> Line<'static> {
    Line::from(vec![
        Span::styled("Last updated ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            reading.updated_at().format("%H:%M:%S").to_string(),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled("   [r] refresh  [x] dismiss  [q] quit", Style::default().fg(COLOR_DIM)),
    ])
}

pub fn render_footer(frame: &mut Frame, area: Rect, reading: &Reading) {
    frame.render_widget(Paragraph::new(footer_line(reading)), area);
}
