//! Dialog Frame Component
//!
//! A bordered overlay anchored to a corner of the screen. Clears what is
//! underneath and returns the inner content area.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Preferred width including borders
    pub width: u16,
    /// Border and title color
    pub color: Color,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16, color: Color) -> Self {
        Self {
            title,
            content_height,
            width: 44,
            color,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

/// Area of a frame placed in the bottom-right corner of `area`, with a one
/// cell margin, shrunk to fit.
pub fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog_area = bottom_right(area, config.width, config.content_height + 2);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default().fg(config.color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.color));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_right_placement() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = bottom_right(area, 40, 4);
        assert_eq!(rect, Rect::new(59, 25, 40, 4));
    }

    #[test]
    fn test_bottom_right_shrinks_on_small_screens() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = bottom_right(area, 40, 6);
        assert_eq!(rect.width, 18);
        assert_eq!(rect.height, 2);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }
}
