//! The single in-app toast.

use std::time::{Duration, Instant};

use crate::models::Notification;

/// A notification on screen, with its expiry.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(notification: Notification, ttl: Duration) -> Self {
        Self::shown_at(notification, ttl, Instant::now())
    }

    pub fn shown_at(notification: Notification, ttl: Duration, shown_at: Instant) -> Self {
        Self {
            notification,
            shown_at,
            ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let start = Instant::now();
        let toast = Toast::shown_at(
            Notification::new("t", "d"),
            Duration::from_secs(4),
            start,
        );

        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_secs(3)));
        assert!(toast.is_expired(start + Duration::from_secs(4)));
    }
}
