//! Notifiers used by the binary.

use tokio::sync::mpsc;

use crate::app::AppMessage;
use crate::models::Notification;
use crate::traits::Notifier;

/// Forwards notifications to the TUI event loop, which shows them as toasts.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn publish(&self, notification: Notification) {
        if self.tx.send(AppMessage::Notify(notification)).is_err() {
            tracing::debug!("Notification dropped: event loop has shut down");
        }
    }
}

/// Writes notifications to stderr; used by `--once`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn publish(&self, notification: Notification) {
        let marker = if notification.is_destructive() { "!" } else { "*" };
        eprintln!("{} {}: {}", marker, notification.title, notification.description);
    }
}
