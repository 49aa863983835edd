//! Status Indicator Component
//!
//! Renders the refresh status shown in the header: a spinner while a cycle is
//! in flight, the refresh hint otherwise.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BUSY, COLOR_DIM};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Build the refresh status line.
pub fn render_refresh_status(busy: bool, frame: usize) -> Line<'static> {
    if busy {
        Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(frame)),
                Style::default().fg(COLOR_BUSY),
            ),
            Span::styled(
                "Refreshing…",
                Style::default().fg(COLOR_BUSY).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "[r] ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Refresh", Style::default().fg(COLOR_DIM)),
        ])
    }
}
