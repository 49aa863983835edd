//! Command-line argument parsing.
//!
//! Flags take their value either as the next argument (`--lat 12.3`) or
//! inline (`--lat=12.3`).

use std::time::Duration;

use crate::error::ConfigError;
use crate::startup::config::{coordinates_from_parts, parse_f64, parse_u64};
use crate::startup::AppConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run one refresh cycle and print the reading
    Once { json: bool },
    /// Run the dashboard (default)
    RunTui,
}

/// Config overrides given on the command line. They win over the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub deny_location: bool,
    pub seed: Option<u64>,
    pub latency: Option<Duration>,
    pub failure_rate: Option<f64>,
    pub placeholder: Option<String>,
}

impl CliOverrides {
    /// Layer the overrides on top of `config` and re-validate.
    pub fn apply(&self, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(coordinates) = coordinates_from_parts(self.latitude, self.longitude)? {
            config.coordinates = Some(coordinates);
        }
        if self.deny_location {
            config.deny_location = true;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(latency) = self.latency {
            config.latency = latency;
        }
        if let Some(rate) = self.failure_rate {
            config.failure_rate = rate;
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub command: CliCommand,
    pub overrides: CliOverrides,
}

/// Parse command-line arguments (the first item is the program name).
///
/// `--version` and `--help` win over everything else.
///
/// ```
/// use aqmon::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["aqmon".to_string(), "--once".to_string()];
/// let parsed = parse_args(args.into_iter()).unwrap();
/// assert_eq!(parsed.command, CliCommand::Once { json: false });
/// ```
pub fn parse_args<I>(args: I) -> Result<ParsedArgs, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut once = false;
    let mut json = false;
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, ConfigError> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ConfigError::MissingValue(name.to_string()))
        };

        let switch = || no_inline_value(&flag, inline.as_deref());

        match flag.as_str() {
            "--version" | "-V" => {
                switch()?;
                return Ok(ParsedArgs { command: CliCommand::Version, overrides });
            }
            "--help" | "-h" => {
                switch()?;
                return Ok(ParsedArgs { command: CliCommand::Help, overrides });
            }
            "--once" => {
                switch()?;
                once = true;
            }
            "--json" => {
                switch()?;
                json = true;
            }
            "--deny-location" => {
                switch()?;
                overrides.deny_location = true;
            }
            "--lat" => overrides.latitude = Some(parse_f64("--lat", &value("--lat")?)?),
            "--lon" => overrides.longitude = Some(parse_f64("--lon", &value("--lon")?)?),
            "--seed" => overrides.seed = Some(parse_u64("--seed", &value("--seed")?)?),
            "--latency-ms" => {
                let ms = parse_u64("--latency-ms", &value("--latency-ms")?)?;
                overrides.latency = Some(Duration::from_millis(ms));
            }
            "--failure-rate" => {
                overrides.failure_rate = Some(parse_f64("--failure-rate", &value("--failure-rate")?)?)
            }
            "--placeholder" => overrides.placeholder = Some(value("--placeholder")?),
            other => return Err(ConfigError::invalid("argument", other, "unknown flag")),
        }
    }

    // --json alone implies --once; the dashboard has no JSON mode.
    let command = if once || json {
        CliCommand::Once { json }
    } else {
        CliCommand::RunTui
    };
    Ok(ParsedArgs { command, overrides })
}

/// Switches are presence-only; `--once=no` is an error, not a silent `true`.
fn no_inline_value(flag: &str, inline: Option<&str>) -> Result<(), ConfigError> {
    match inline {
        Some(value) => Err(ConfigError::invalid(flag, value, "flag takes no value")),
        None => Ok(()),
    }
}
