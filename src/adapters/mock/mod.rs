//! Mock implementations for testing.
//!
//! These doubles make the refresh controller testable without timers,
//! randomness or a terminal.
//!
//! # Available Mocks
//!
//! - [`MockLocationProvider`] - fixed position result, counts calls
//! - [`MockSource`] - scripted measurements, optional gate
//! - [`RecordingNotifier`] - captures notifications

pub mod location;
pub mod notifier;
pub mod source;

pub use location::MockLocationProvider;
pub use notifier::RecordingNotifier;
pub use source::MockSource;
