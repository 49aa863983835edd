//! Concrete implementations of the collaborator traits.
//!
//! # Adapters
//!
//! - [`SimulatedSource`] - latency plus random measurements
//! - [`ConfiguredLocation`] - position from CLI/env, or denied/unavailable
//! - [`ChannelNotifier`] - toasts via the TUI event loop
//! - [`ConsoleNotifier`] - stderr output for `--once`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockLocationProvider`] - scripted position results
//! - [`mock::MockSource`] - scripted measurements, optional gate
//! - [`mock::RecordingNotifier`] - captures published notifications

pub mod channel_notifier;
pub mod configured_location;
pub mod mock;
pub mod simulated;

pub use channel_notifier::{ChannelNotifier, ConsoleNotifier};
pub use configured_location::ConfiguredLocation;
pub use mock::{MockLocationProvider, MockSource, RecordingNotifier};
pub use simulated::SimulatedSource;
