// =============================================================================
// Bollinger Bandwidth
// =============================================================================
//
// A normalised measure of price dispersion over the trailing window:
//
//   bandwidth = (2 * multiplier * sigma) / mean
//
// where sigma is the population standard deviation.  This is the band *width*
// relative to the middle band, not the upper/lower bands themselves.

use crate::indicators::{round_dp, window};

/// Compute the Bollinger bandwidth over the trailing `period` closes, rounded
/// to 4 decimal places.
///
/// Returns `None` when:
/// - Fewer than `period` data points.
/// - The window mean is zero (degenerate input — an unbounded width would
///   otherwise leak out).
pub fn calculate_bandwidth(closes: &[f64], period: usize, std_dev_multiplier: f64) -> Option<f64> {
    let win = window::trailing_window(closes, period)?;

    let mean = window::mean(win);
    if mean == 0.0 {
        return None;
    }

    let std_dev = window::population_variance(win, mean).sqrt();

    Some(round_dp(2.0 * std_dev_multiplier * std_dev / mean, 4))
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bandwidth_insufficient_data() {
        let closes = [1.0, 2.0, 3.0];
        assert!(calculate_bandwidth(&closes, 20, 2.0).is_none());
    }

    #[test]
    fn bandwidth_flat_series_is_zero() {
        let closes = [100.0; 20];
        assert_eq!(calculate_bandwidth(&closes, 20, 2.0), Some(0.0));
    }

    #[test]
    fn bandwidth_zero_mean_is_insufficient() {
        // Symmetric window around zero: sigma is positive but the mean is 0,
        // so no finite normalised width exists.
        let closes = [-1.0, 1.0, -1.0, 1.0];
        assert!(calculate_bandwidth(&closes, 4, 2.0).is_none());
    }

    #[test]
    fn bandwidth_known_value() {
        // Window [9, 11]: mean 10, population sigma 1.
        // bandwidth = (2 * 2 * 1) / 10 = 0.4
        let closes = [9.0, 11.0];
        let bw = calculate_bandwidth(&closes, 2, 2.0).unwrap();
        assert!((bw - 0.4).abs() < 1e-12, "expected 0.4, got {bw}");
    }

    #[test]
    fn bandwidth_grows_with_dispersion() {
        let calm: Vec<f64> = (0..20).map(|i| 100.0 + (i % 2) as f64 * 0.1).collect();
        let wild: Vec<f64> = (0..20).map(|i| 100.0 + (i % 2) as f64 * 10.0).collect();
        let bw_calm = calculate_bandwidth(&calm, 20, 2.0).unwrap();
        let bw_wild = calculate_bandwidth(&wild, 20, 2.0).unwrap();
        assert!(bw_wild > bw_calm);
    }
}
