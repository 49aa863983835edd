//! Domain data types.

pub mod coordinates;
pub mod notification;
pub mod reading;

pub use coordinates::Coordinates;
pub use notification::{Notification, Severity};
pub use reading::{Measurement, Pollutants, Reading, DEFAULT_LOCATION_LABEL};
