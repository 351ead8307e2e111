// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD = EMA(fast) - EMA(slow), both accumulated over the full supplied
// series.  Only the line itself is computed — the dashboard shows no signal
// line or histogram.

use crate::indicators::{moving_average::latest_ema, round_dp};

/// Compute the MACD line for the given closes, rounded to 6 decimal places.
///
/// Returns `None` when `closes.len() < slow_period` (the longer of the two
/// look-backs governs the minimum length).
pub fn calculate_macd(closes: &[f64], fast_period: usize, slow_period: usize) -> Option<f64> {
    if closes.len() < slow_period {
        return None;
    }

    let fast = latest_ema(closes, fast_period)?;
    let slow = latest_ema(closes, slow_period)?;

    Some(round_dp(fast - slow, 6))
}
