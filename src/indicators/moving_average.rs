// =============================================================================
// Moving Averages — SMA and EMA
// =============================================================================
//
// SMA is the mean of the trailing `period` prices.
//
// EMA gives more weight to recent prices:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The very first EMA value is seeded with the SMA of the first `period`
// closes and the recurrence then runs to the end of the series.  Note the
// asymmetry against the other indicators: EMA accumulates from the *start* of
// the supplied series rather than windowing from the end.  That is the
// running-state definition and changes the numeric result compared to a
// trailing-window EMA, so it must stay exactly as-is.
// =============================================================================

use crate::indicators::window;

/// Simple Moving Average of the trailing `period` prices.
///
/// Returns `None` when `period` is zero or the series is too short.
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    let win = window::trailing_window(prices, period)?;
    Some(window::mean(win))
}

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// Returns an empty `Vec` when the input is too short or the period is zero.
/// Each output element corresponds to a close starting at index `period - 1`.
///
/// # Edge cases
/// - `period == 0` => empty vec (division by zero guard)
/// - `closes.len() < period` => empty vec
/// - Non-finite intermediate values stop the series; downstream consumers
///   should not trust a broken tail.
pub fn calculate_ema(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let sma: f64 = closes[..period].iter().sum::<f64>() / period as f64;
    if !sma.is_finite() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(closes.len() - period + 1);
    result.push(sma);

    let mut prev_ema = sma;
    for &close in &closes[period..] {
        let ema = close * multiplier + prev_ema * (1.0 - multiplier);
        if !ema.is_finite() {
            break;
        }
        result.push(ema);
        prev_ema = ema;
    }

    result
}

/// The most recent EMA value — the full series run down to its last element.
///
/// Returns `None` when `closes.len() < period`.
pub fn latest_ema(closes: &[f64], period: usize) -> Option<f64> {
    calculate_ema(closes, period).last().copied()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- calculate_sma ---------------------------------------------------

    #[test]
    fn sma_basic() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        // Trailing 3: (3 + 4 + 5) / 3 = 4.0
        assert!((calculate_sma(&prices, 3).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn sma_insufficient_data() {
        assert!(calculate_sma(&[1.0, 2.0], 5).is_none());
        assert!(calculate_sma(&[], 1).is_none());
    }

    #[test]
    fn sma_period_zero() {
        assert!(calculate_sma(&[1.0, 2.0, 3.0], 0).is_none());
    }

    #[test]
    fn sma_constant_series_returns_the_constant() {
        let prices = [42.0; 20];
        assert!((calculate_sma(&prices, 14).unwrap() - 42.0).abs() < 1e-12);
    }

    // ---- calculate_ema ---------------------------------------------------

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).is_empty());
    }

    #[test]
    fn ema_period_zero() {
        assert!(calculate_ema(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn ema_insufficient_data() {
        assert!(calculate_ema(&[1.0, 2.0], 5).is_empty());
        assert!(latest_ema(&[1.0, 2.0], 5).is_none());
    }

    #[test]
    fn ema_period_equals_length() {
        let closes = [2.0, 4.0, 6.0];
        let ema = calculate_ema(&closes, 3);
        assert_eq!(ema.len(), 1);
        // Should be the SMA = (2+4+6)/3 = 4.0
        assert!((ema[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1,2,3,4,5,6,7,8,9,10]
        // SMA of first 5 = 3.0, multiplier = 2/6 = 1/3
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let ema = calculate_ema(&closes, 5);
        assert_eq!(ema.len(), 6); // indices 4..9

        let mult = 2.0 / 6.0;
        let mut expected = 3.0; // SMA seed
        let mut expected_vec = vec![expected];
        for &c in &closes[5..] {
            expected = c * mult + expected * (1.0 - mult);
            expected_vec.push(expected);
        }
        for (a, b) in ema.iter().zip(expected_vec.iter()) {
            assert!((a - b).abs() < 1e-10, "got {a}, expected {b}");
        }
        assert!((latest_ema(&closes, 5).unwrap() - expected_vec.last().unwrap()).abs() < 1e-10);
    }

    #[test]
    fn ema_constant_series_returns_the_constant() {
        // For a constant series the seed is the constant and the recurrence
        // never moves away from it.
        let closes = [7.5; 30];
        let ema = calculate_ema(&closes, 14);
        for &v in &ema {
            assert!((v - 7.5).abs() < 1e-12, "expected 7.5, got {v}");
        }
    }

    #[test]
    fn ema_is_deterministic() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
        let a = calculate_ema(&closes, 12);
        let b = calculate_ema(&closes, 12);
        assert_eq!(a, b);
    }
}
