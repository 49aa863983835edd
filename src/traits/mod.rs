//! Trait abstractions for the refresh controller's collaborators.
//!
//! # Traits
//!
//! - [`LocationProvider`] - current position, or denied/unavailable
//! - [`AirQualitySource`] - raw measurements (simulated in this build)
//! - [`Notifier`] - user-facing toasts

pub mod location;
pub mod notifier;
pub mod source;

pub use location::LocationProvider;
pub use notifier::Notifier;
pub use source::AirQualitySource;
