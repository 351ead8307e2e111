// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR here is the unweighted mean of the most recent `period` TR values —
// the plain-average variant the dashboard uses for its stop-distance hints,
// not Wilder's smoothed recurrence.
// =============================================================================

use crate::market_data::Candle;

/// Compute the most recent ATR value from a slice of OHLCV candles (oldest
/// first).
///
/// Returns `None` when:
/// - `period` is zero.
/// - There are fewer than `period + 1` candles (each TR needs the previous
///   candle's close).
/// - The result is non-finite (malformed candle fields).
pub fn calculate_atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    // The last `period` true ranges come from the last `period + 1` candles.
    let recent = &candles[candles.len() - (period + 1)..];

    let mut tr_sum = 0.0;
    for pair in recent.windows(2) {
        let high = pair[1].high;
        let low = pair[1].low;
        let prev_close = pair[0].close;

        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();

        tr_sum += hl.max(hc).max(lc);
    }

    let atr = tr_sum / period as f64;
    atr.is_finite().then_some(atr)
}
