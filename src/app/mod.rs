//! Application state for the dashboard.
//!
//! [`App`] is the presentation boundary: it renders the controller's latest
//! [`DashboardSnapshot`] and issues the one domain command, "refresh now".
//! It never edits the reading itself.

mod handlers;
mod messages;
pub mod toast;

pub use messages::AppMessage;
pub use toast::Toast;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::refresh::{DashboardSnapshot, RefreshController};

/// Dashboard UI state.
pub struct App {
    /// Controller owning the live reading
    pub controller: Arc<RefreshController>,
    /// Last snapshot received from the controller
    pub snapshot: DashboardSnapshot,
    /// Toast currently on screen
    pub toast: Option<Toast>,
    /// How long toasts stay visible
    pub toast_duration: Duration,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Set when the user asks to exit
    pub should_quit: bool,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Receiver for background messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(
        controller: Arc<RefreshController>,
        message_rx: mpsc::UnboundedReceiver<AppMessage>,
        toast_duration: Duration,
    ) -> Self {
        let snapshot = controller.snapshot();
        Self {
            controller,
            snapshot,
            toast: None,
            toast_duration,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
        }
    }

    /// Start a locate-and-refresh cycle in the background.
    ///
    /// Returns `false` (and does nothing) while a cycle is in flight.
    pub fn request_refresh(&mut self) -> bool {
        match self.controller.spawn_locate_and_refresh() {
            Some(_) => {
                self.mark_dirty();
                true
            }
            None => {
                tracing::debug!("Refresh request ignored while busy");
                false
            }
        }
    }

    /// Replace the rendered snapshot with a newer one from the controller.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        if snapshot != self.snapshot {
            self.snapshot = snapshot;
            self.mark_dirty();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.snapshot.busy
    }

    /// Advance animations and expire the toast.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
        self.expire_toast(Instant::now());
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
