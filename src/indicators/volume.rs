// =============================================================================
// Volume Ratio
// =============================================================================
//
// Latest quote volume divided by the average quote volume of the `period`
// candles immediately preceding it (the latest candle is excluded from its
// own baseline).  A ratio above 1 flags abnormal activity.

use crate::market_data::Candle;

/// Compute the volume ratio for the latest candle.
///
/// Returns `None` when `period` is zero or there are fewer than `period + 1`
/// candles.  A zero baseline yields `Some(1.0)` — the defined neutral value,
/// deliberately not an error and not infinite.
pub fn calculate_volume_ratio(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let latest = candles.last()?;
    let baseline = &candles[candles.len() - 1 - period..candles.len() - 1];
    let avg_volume = baseline.iter().map(|c| c.quote_volume).sum::<f64>() / period as f64;

    if avg_volume == 0.0 {
        return Some(1.0);
    }

    Some(latest.quote_volume / avg_volume)
}
