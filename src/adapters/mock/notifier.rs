//! Recording notifier for testing.

use std::sync::{Arc, Mutex};

use crate::models::Notification;
use crate::traits::Notifier;

/// Notifier that keeps every published notification for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    published: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications published so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.published.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.published.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.published.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, notification: Notification) {
        self.published.lock().unwrap().push(notification);
    }
}
