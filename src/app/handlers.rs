//! Key and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::toast::Toast;
use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::Notify(notification) => {
                tracing::debug!(title = %notification.title, "Showing toast");
                // Only one toast at a time; the newest replaces the old one.
                self.toast = Some(Toast::new(notification, self.toast_duration));
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
                self.request_refresh();
            }
            KeyCode::Char('x') => {
                if self.toast.take().is_some() {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }
}
