//! AppMessage enum for async communication within the application.

use crate::models::Notification;

/// Messages delivered to the event loop from background tasks.
///
/// Snapshot changes travel over the controller's watch channel instead.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A notification to show as a toast
    Notify(Notification),
}
