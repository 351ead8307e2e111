// =============================================================================
// Market Analysis Snapshot
// =============================================================================
//
// Runs every indicator over one fetched candle series and bundles the values
// plus their classifications into a single serialisable record for the
// dashboard.  Pure assembly: all numeric work happens in `indicators`, all
// interpretation in `signals`.  Insufficient-data results stay `null` in the
// JSON payload — the frontend must never read a missing value as zero.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::indicators::levels::PriceLevels;
use crate::indicators::{atr, bollinger, levels, macd, moving_average, rsi, volume, williams_r};
use crate::market_data::{closes, Candle};
use crate::runtime_config::IndicatorSettings;
use crate::signals::{interpret_macd, interpret_rsi};
use crate::types::Classification;

/// Full indicator snapshot for a single symbol.
#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysis {
    pub symbol: String,
    /// ISO 8601 timestamp of when the snapshot was assembled.
    pub generated_at: String,
    /// Close of the most recent candle.
    pub last_price: Option<f64>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub rsi_signal: Option<Classification>,
    pub macd: Option<f64>,
    pub macd_signal: Option<Classification>,
    pub williams_r: Option<f64>,
    pub bollinger_bandwidth: Option<f64>,
    pub atr: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub levels: Option<PriceLevels>,
    pub candle_count: usize,
}

/// Compute the full snapshot for `symbol` from an oldest-first candle series.
///
/// One-shot: the series is read, never stored — the next refresh supplies a
/// fresh one.
pub fn analyze(symbol: &str, candles: &[Candle], settings: &IndicatorSettings) -> MarketAnalysis {
    let close_series = closes(candles);

    let rsi_value = rsi::calculate_rsi(&close_series, settings.rsi_period);
    let macd_value = macd::calculate_macd(
        &close_series,
        settings.macd_fast_period,
        settings.macd_slow_period,
    );

    let analysis = MarketAnalysis {
        symbol: symbol.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        last_price: close_series.last().copied(),
        sma: moving_average::calculate_sma(&close_series, settings.ma_period),
        ema: moving_average::latest_ema(&close_series, settings.ma_period),
        rsi: rsi_value,
        rsi_signal: rsi_value
            .map(|v| interpret_rsi(v, settings.rsi_oversold, settings.rsi_overbought)),
        macd: macd_value,
        macd_signal: macd_value.map(interpret_macd),
        williams_r: williams_r::calculate_williams_r(&close_series, settings.williams_period),
        bollinger_bandwidth: bollinger::calculate_bandwidth(
            &close_series,
            settings.bollinger_period,
            settings.bollinger_std_dev,
        ),
        atr: atr::calculate_atr(candles, settings.atr_period),
        volume_ratio: volume::calculate_volume_ratio(candles, settings.volume_period),
        levels: levels::calculate_support_resistance(candles, settings.level_lookback),
        candle_count: candles.len(),
    };

    debug!(
        symbol,
        candles = candles.len(),
        rsi = ?analysis.rsi,
        macd = ?analysis.macd,
        "analysis snapshot assembled"
    );

    analysis
}
