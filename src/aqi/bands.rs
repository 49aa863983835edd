//! Shared AQI boundary table.
//!
//! Both the quality-level and the display-tier classifiers resolve an AQI to
//! a band index through [`band_index`]. The boundaries live in exactly one
//! place; the ordering is checked at compile time.

/// Upper bound (inclusive) of the "Good" band.
pub const GOOD_MAX: f64 = 50.0;

/// Upper bound (inclusive) of the "Moderate" band.
pub const MODERATE_MAX: f64 = 100.0;

/// Upper bound (inclusive) of the "Unhealthy for Sensitive Groups" band.
pub const SENSITIVE_MAX: f64 = 150.0;

/// Upper bound (inclusive) of the "Unhealthy" band.
pub const UNHEALTHY_MAX: f64 = 200.0;

/// Upper bound (inclusive) of the "Very Unhealthy" band.
/// Anything above is hazardous.
pub const VERY_UNHEALTHY_MAX: f64 = 300.0;

const _: () = assert!(GOOD_MAX < MODERATE_MAX);
const _: () = assert!(MODERATE_MAX < SENSITIVE_MAX);
const _: () = assert!(SENSITIVE_MAX < UNHEALTHY_MAX);
const _: () = assert!(UNHEALTHY_MAX < VERY_UNHEALTHY_MAX);

/// Inclusive upper bounds, ascending. The band after the last bound is open.
pub const AQI_BANDS: [f64; 5] = [
    GOOD_MAX,
    MODERATE_MAX,
    SENSITIVE_MAX,
    UNHEALTHY_MAX,
    VERY_UNHEALTHY_MAX,
];

/// Number of bands, including the open-ended top band.
pub const BAND_COUNT: usize = AQI_BANDS.len() + 1;

/// Resolve an AQI value to its band index in `0..BAND_COUNT`.
///
/// First bound the value does not exceed wins. Values that fail every
/// comparison (anything above the last bound, and NaN) fall into the top band.
pub fn band_index(aqi: f64) -> usize {
    AQI_BANDS
        .iter()
        .position(|&upper| aqi <= upper)
        .unwrap_or(AQI_BANDS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_resolve_to_lower_band() {
        for (idx, bound) in AQI_BANDS.iter().enumerate() {
            assert_eq!(band_index(*bound), idx, "bound {} should stay in band {}", bound, idx);
        }
    }

    #[test]
    fn test_one_above_bound_moves_up() {
        for (idx, bound) in AQI_BANDS.iter().enumerate() {
            assert_eq!(band_index(bound + 1.0), idx + 1);
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(band_index(f64::NEG_INFINITY), 0);
        assert_eq!(band_index(-12.0), 0);
        assert_eq!(band_index(f64::INFINITY), BAND_COUNT - 1);
        assert_eq!(band_index(f64::NAN), BAND_COUNT - 1);
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(band_index(50.0001), 1);
        assert_eq!(band_index(300.5), 5);
        assert_eq!(band_index(99.99), 1);
    }
}
