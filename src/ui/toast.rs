//! Toast overlay.

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::Toast;
use crate::models::Severity;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::theme::{COLOR_DESTRUCTIVE, COLOR_DIM, COLOR_TOAST};

pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let notification = &toast.notification;
    let color = match notification.severity {
        Severity::Normal => COLOR_TOAST,
        Severity::Destructive => COLOR_DESTRUCTIVE,
    };

    let config = DialogFrameConfig::new(&notification.title, 2, color).width(48);
    let area = frame.area();
    let inner = render_dialog_frame(frame, area, &config);

    let body = Paragraph::new(vec![
        Line::raw(notification.description.as_str()),
        Line::styled("[x] dismiss", Style::default().fg(COLOR_DIM)),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
