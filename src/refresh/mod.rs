//! Refresh cycle and live dashboard state.
//!
//! ```text
//! Idle --(not busy)--> Busy --(success | failure)--> Idle
//! ```

mod busy;
pub mod controller;
pub mod snapshot;

pub use controller::{
    RefreshController, RefreshSettings, FALLBACK_DESCRIPTION, FETCH_FAILED_TITLE, UPDATED_TITLE,
};
pub use snapshot::DashboardSnapshot;
