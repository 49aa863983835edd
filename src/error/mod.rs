//! Error types for aqmon.
//!
//! | Error | Raised by | Recovery |
//! |-------|-----------|----------|
//! | [`LocationError`] | location provider | refresh without coordinates |
//! | [`SourceError`] | data source | keep the previous reading |
//! | [`ConfigError`] | CLI / environment parsing | exit with a message |
//!
//! None of these escape the refresh controller; only [`ConfigError`] reaches
//! `main`.

mod config;
mod location;
mod source;

pub use config::ConfigError;
pub use location::LocationError;
pub use source::SourceError;
