// =============================================================================
// Support / Resistance Levels
// =============================================================================
//
// Simple extremes over the trailing lookback window: support is the lowest
// low, resistance the highest high.

use serde::Serialize;

use crate::market_data::Candle;

/// A support/resistance pair. Always returned together — a partial pair is
/// never produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceLevels {
    pub support: f64,
    pub resistance: f64,
}

/// Compute support and resistance over the trailing `lookback` candles.
///
/// Returns `None` when `lookback` is zero or `candles.len() < lookback`.
pub fn calculate_support_resistance(candles: &[Candle], lookback: usize) -> Option<PriceLevels> {
    if lookback == 0 || candles.len() < lookback {
        return None;
    }

    let recent = &candles[candles.len() - lookback..];
    let support = recent.iter().fold(f64::INFINITY, |a, c| a.min(c.low));
    let resistance = recent.iter().fold(f64::NEG_INFINITY, |a, c| a.max(c.high));

    Some(PriceLevels {
        support,
        resistance,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64) -> Candle {
        Candle::new(0, (high + low) / 2.0, high, low, (high + low) / 2.0, 10.0, 1000.0, 0)
    }

    #[test]
    fn levels_insufficient_data() {
        let candles = vec![candle(101.0, 99.0); 47];
        assert!(calculate_support_resistance(&candles, 48).is_none());
    }

    #[test]
    fn levels_basic() {
        let candles = vec![
            candle(105.0, 98.0),
            candle(110.0, 101.0),
            candle(104.0, 95.0),
            candle(107.0, 99.0),
        ];
        let levels = calculate_support_resistance(&candles, 4).unwrap();
        assert!((levels.support - 95.0).abs() < 1e-12);
        assert!((levels.resistance - 110.0).abs() < 1e-12);
    }

    #[test]
    fn levels_window_from_the_end() {
        // An extreme candle outside the lookback window is ignored.
        let mut candles = vec![candle(500.0, 1.0)];
        candles.extend(vec![candle(102.0, 98.0); 4]);
        let levels = calculate_support_resistance(&candles, 4).unwrap();
        assert!((levels.support - 98.0).abs() < 1e-12);
        assert!((levels.resistance - 102.0).abs() < 1e-12);
    }
}
