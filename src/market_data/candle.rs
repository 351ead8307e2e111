// =============================================================================
// Candle -- one OHLCV bar as delivered by the exchange kline endpoint
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single OHLCV candle. Series are always ordered oldest-first; the
/// indicator functions rely on that ordering and never mutate their input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open time in epoch milliseconds.
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Base-asset volume traded during the bar.
    pub volume: f64,
    /// Quote-asset volume (e.g. USDT) traded during the bar.
    pub quote_volume: f64,
    /// Bar close time in epoch milliseconds.
    pub close_time: i64,
}

impl Candle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        open_time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        quote_volume: f64,
        close_time: i64,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            quote_volume,
            close_time,
        }
    }
}

/// Extract the close-price series from a candle series, preserving order.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
