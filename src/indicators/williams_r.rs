// =============================================================================
// Williams %R
// =============================================================================
//
// Oscillator in [-100, 0] measuring where the current price sits within the
// recent high/low range:
//
//   %R = ((highest - current) / (highest - lowest)) * -100
//
// This implementation windows over the close-price series rather than
// separate high/low candle fields — a deliberate simplification carried over
// from the dashboard's data flow, where only the close series is available at
// this point.  Do not switch to candle highs/lows without a product decision.
// =============================================================================

use crate::indicators::{round_dp, window};

/// Compute Williams %R over the trailing `period` closes, rounded to 2
/// decimal places.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => `None`
/// - Flat window (`highest == lowest`) => `Some(-50.0)`, the mid-range
///   convention that avoids a division by zero.
pub fn calculate_williams_r(closes: &[f64], period: usize) -> Option<f64> {
    let win = window::trailing_window(closes, period)?;

    let highest = win.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let lowest = win.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let current = *closes.last()?;

    if highest == lowest {
        return Some(-50.0);
    }

    Some(round_dp((highest - current) / (highest - lowest) * -100.0, 2))
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn williams_insufficient_data() {
        assert!(calculate_williams_r(&[1.0, 2.0], 14).is_none());
        assert!(calculate_williams_r(&[], 14).is_none());
    }

    #[test]
    fn williams_period_zero() {
        assert!(calculate_williams_r(&[1.0, 2.0, 3.0], 0).is_none());
    }

    #[test]
    fn williams_flat_window_is_minus_50() {
        let closes = [100.0; 20];
        assert_eq!(calculate_williams_r(&closes, 14), Some(-50.0));
    }

    #[test]
    fn williams_at_window_high_is_0() {
        // Current price equals the window high => %R = 0.
        let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
        let r = calculate_williams_r(&closes, 5).unwrap();
        assert!(r.abs() < 1e-12, "expected 0.0, got {r}");
    }

    #[test]
    fn williams_at_window_low_is_minus_100() {
        let closes = [14.0, 13.0, 12.0, 11.0, 10.0];
        let r = calculate_williams_r(&closes, 5).unwrap();
        assert!((r - -100.0).abs() < 1e-12, "expected -100.0, got {r}");
    }

    #[test]
    fn williams_mid_range() {
        // Window [10, 20], current 15 => %R = ((20-15)/(20-10)) * -100 = -50.
        let closes = [10.0, 20.0, 15.0];
        let r = calculate_williams_r(&closes, 3).unwrap();
        assert!((r - -50.0).abs() < 1e-12);
    }

    #[test]
    fn williams_range_check() {
        let closes: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.4).sin() * 7.0).collect();
        let r = calculate_williams_r(&closes, 14).unwrap();
        assert!((-100.0..=0.0).contains(&r), "%R {r} out of range");
    }

    #[test]
    fn williams_uses_only_the_trailing_window() {
        // A huge spike outside the window must not influence the result.
        let mut closes = vec![1000.0];
        closes.extend([10.0, 11.0, 12.0, 13.0, 14.0]);
        let r = calculate_williams_r(&closes, 5).unwrap();
        assert!(r.abs() < 1e-12, "spike outside window leaked in: {r}");
    }
}
