//! `--once`: one locate-and-refresh cycle, printed to stdout.

use std::fmt::Write;
use std::sync::Arc;

use color_eyre::{eyre::eyre, Result};

use crate::adapters::ConsoleNotifier;
use crate::aqi::Pollutant;
use crate::models::Reading;
use crate::startup::{build_controller, AppConfig};

/// Run a single cycle and print the resulting reading.
///
/// A failed fetch prints nothing on stdout and returns an error, so the
/// process exits nonzero instead of showing the placeholder as live data.
pub async fn run_once(config: &AppConfig, json: bool) -> Result<()> {
    let controller = build_controller(config, Arc::new(ConsoleNotifier));
    let reading = controller
        .try_locate_and_refresh()
        .await
        .ok_or_else(|| eyre!("a refresh cycle is already running"))?
        .map_err(|err| eyre!("{}: {err}", err.user_message()))?;

    println!("{}", format_reading(&reading, json)?);
    Ok(())
}

/// Render a reading as plain text or pretty JSON.
pub fn format_reading(reading: &Reading, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(reading)?);
    }

    let mut out = String::new();
    writeln!(out, "Location: {}", reading.location())?;
    writeln!(out, "AQI:      {} ({})", reading.aqi(), reading.quality_level())?;
    for pollutant in Pollutant::ALL {
        match reading.pollutants().get(pollutant) {
            Some(value) => writeln!(
                out,
                "{:<9} {:.1} {}",
                format!("{}:", pollutant.name()),
                value,
                pollutant.unit()
            )?,
            None => writeln!(out, "{:<9} N/A", format!("{}:", pollutant.name()))?,
        }
    }
    write!(out, "Updated:  {}", reading.updated_at().format("%Y-%m-%d %H:%M:%S"))?;
    Ok(out)
}
