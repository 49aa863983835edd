//! Location provider trait abstraction.

use async_trait::async_trait;

use crate::error::LocationError;
use crate::models::Coordinates;

/// Source of the user's current position.
///
/// A request either yields coordinates or fails as denied/unavailable. The
/// call may suspend (e.g. waiting for a permission prompt); callers bound it
/// with a timeout.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request the current position.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}
