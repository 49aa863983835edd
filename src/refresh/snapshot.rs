//! Read model exposed to the presentation layer.

use crate::models::Reading;

/// The single live state: the current reading plus the busy flag.
///
/// Only the refresh controller writes it, and a new reading always replaces
/// the old one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub reading: Reading,
    pub busy: bool,
}

impl DashboardSnapshot {
    pub fn idle(reading: Reading) -> Self {
        Self {
            reading,
            busy: false,
        }
    }
}
