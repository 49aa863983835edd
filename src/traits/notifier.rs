//! Notification sink trait abstraction.

use crate::models::Notification;

/// Fire-and-forget sink for user-facing notifications.
///
/// Implementations must not block; the caller neither awaits nor inspects a
/// response.
pub trait Notifier: Send + Sync {
    fn publish(&self, notification: Notification);
}
