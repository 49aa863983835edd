//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal, so in TUI mode log lines go to a file.
//! The filter comes from `AQMON_LOG`, then `RUST_LOG`, defaulting to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "AQMON_LOG";
pub const ENV_LOG_FILE: &str = "AQMON_LOG_FILE";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `AQMON_LOG_FILE`, or `<cache dir>/aqmon/aqmon.log`.
pub fn default_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_LOG_FILE) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::cache_dir().map(|dir| dir.join("aqmon").join("aqmon.log"))
}

/// Open a log file for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    match target {
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| eyre!(e))?,
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre!(e))?
        }
    }

    Ok(())
}
