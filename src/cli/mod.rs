//! Command-line interface.
//!
//! - Argument parsing into a [`CliCommand`] plus config overrides
//! - Version and usage text
//! - The `--once` one-shot mode
//!
//! `main` parses the arguments first and only starts the dashboard for
//! [`CliCommand::RunTui`].

pub mod args;
pub mod once;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, ParsedArgs};
pub use once::{format_reading, run_once};
pub use version::{version_string, USAGE, VERSION};
