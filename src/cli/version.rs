//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: aqmon [OPTIONS]

Terminal air-quality dashboard with simulated readings.

Options:
      --once               Run one refresh cycle, print the reading and exit
      --json               Print the reading as JSON (implies --once)
      --lat <DEG>          Latitude reported by the location provider
      --lon <DEG>          Longitude reported by the location provider
      --deny-location      Simulate a refused location permission
      --placeholder <TEXT> Location label used without coordinates
      --seed <N>           Seed for reproducible readings
      --latency-ms <MS>    Simulated fetch latency (default 1000)
      --failure-rate <P>   Probability of a simulated fetch failure (0-1)
  -h, --help               Print this help
  -V, --version            Print version

Keys: r refresh, x dismiss toast, q quit

Environment: AQMON_LAT, AQMON_LON, AQMON_DENY_LOCATION, AQMON_PLACEHOLDER,
AQMON_SEED, AQMON_LATENCY_MS, AQMON_FAILURE_RATE, AQMON_TOAST_MS, AQMON_LOG,
AQMON_LOG_FILE";

pub fn version_string() -> String {
    format!("aqmon {}", VERSION)
}
