// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the SMA of the first `period`
//          gains / losses.
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The seed phase consumes `period` deltas, so at least `period + 1` closes are
// required.  When the average loss is zero (no down moves anywhere in the
// series, including a perfectly flat one) RSI is 100 by definition.
// =============================================================================

use crate::indicators::round_dp;

/// Compute the most recent RSI value for the given `closes` and `period`,
/// rounded to 2 decimal places.
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `closes.len() < period + 1` => `None` (need at least `period` deltas)
/// - `avg_loss == 0` => `Some(100.0)` (all gains, or no movement at all)
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    // --- Seed averages over the first `period` deltas ------------------------
    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in closes[..period + 1].windows(2) {
        let delta = pair[1] - pair[0];
        if delta >= 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let period_f = period as f64;
    let mut avg_gain = gains / period_f;
    let mut avg_loss = losses / period_f;

    // --- Wilder's smoothing over the remaining deltas ------------------------
    for pair in closes[period..].windows(2) {
        let delta = pair[1] - pair[0];
        avg_gain = (avg_gain * (period_f - 1.0) + delta.max(0.0)) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + (-delta).max(0.0)) / period_f;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(round_dp(100.0 - 100.0 / (1.0 + rs), 2))
}
