//! Busy flag guard.

use std::sync::Arc;
use tokio::sync::watch;

use super::snapshot::DashboardSnapshot;

/// Holds the busy flag for one refresh cycle.
///
/// Acquisition flips `busy` from false to true under the watch channel's
/// lock, so two callers can never both succeed. Dropping the guard clears the
/// flag, whether the cycle finished, failed, unwound or was dropped mid-await.
///
/// The guard owns a handle to the channel, so it can be taken before a cycle
/// is spawned and moved into the task.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    state: Arc<watch::Sender<DashboardSnapshot>>,
}

impl BusyGuard {
    /// Returns `None` if a cycle already holds the flag.
    pub(crate) fn acquire(state: &Arc<watch::Sender<DashboardSnapshot>>) -> Option<Self> {
        let acquired = state.send_if_modified(|snapshot| {
            if snapshot.busy {
                false
            } else {
                snapshot.busy = true;
                true
            }
        });

        // Lazy: a guard built on the failure path would clear the flag on drop.
        acquired.then(|| Self {
            state: Arc::clone(state),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state.send_modify(|snapshot| snapshot.busy = false);
    }
}
