// =============================================================================
// Runtime Configuration — Dashboard backend settings with atomic save
// =============================================================================
//
// Central configuration hub for the Pulse Deck backend.  Every tunable
// parameter lives here — one named, strongly-typed object, so a typo'd
// lookup key cannot silently fall back to a missing default.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbols() -> Vec<String> {
    vec![
        "BTCUSDT".to_string(),
        "ETHUSDT".to_string(),
        "XRPUSDT".to_string(),
        "BNBUSDT".to_string(),
        "SOLUSDT".to_string(),
    ]
}

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_kline_interval() -> String {
    "1h".to_string()
}

fn default_kline_limit() -> u32 {
    500
}

fn default_cache_ttl_secs() -> u64 {
    10
}

fn default_ma_period() -> usize {
    50
}

fn default_rsi_period() -> usize {
    14
}

fn default_rsi_oversold() -> f64 {
    30.0
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_macd_fast_period() -> usize {
    12
}

fn default_macd_slow_period() -> usize {
    26
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_std_dev() -> f64 {
    2.0
}

fn default_williams_period() -> usize {
    14
}

fn default_atr_period() -> usize {
    14
}

fn default_volume_period() -> usize {
    20
}

fn default_level_lookback() -> usize {
    48
}

// =============================================================================
// IndicatorSettings
// =============================================================================

/// Periods and thresholds for every indicator the dashboard computes.
///
/// One minimum-length rule per indicator lives in the indicator itself; this
/// struct only carries the tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSettings {
    /// Moving-average period used for the SMA/EMA snapshot values.
    #[serde(default = "default_ma_period")]
    pub ma_period: usize,

    /// RSI look-back period.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// RSI values strictly below this classify as oversold (buy).
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,

    /// RSI values at or above this classify as overbought (sell).
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// MACD fast EMA period.
    #[serde(default = "default_macd_fast_period")]
    pub macd_fast_period: usize,

    /// MACD slow EMA period (governs the minimum series length).
    #[serde(default = "default_macd_slow_period")]
    pub macd_slow_period: usize,

    /// Bollinger bandwidth window.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Bollinger standard-deviation multiplier.
    #[serde(default = "default_bollinger_std_dev")]
    pub bollinger_std_dev: f64,

    /// Williams %R look-back period.
    #[serde(default = "default_williams_period")]
    pub williams_period: usize,

    /// ATR look-back period.
    #[serde(default = "default_atr_period")]
    pub atr_period: usize,

    /// Volume-ratio baseline period (latest candle excluded).
    #[serde(default = "default_volume_period")]
    pub volume_period: usize,

    /// Support/resistance lookback in candles.
    #[serde(default = "default_level_lookback")]
    pub level_lookback: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            ma_period: default_ma_period(),
            rsi_period: default_rsi_period(),
            rsi_oversold: default_rsi_oversold(),
            rsi_overbought: default_rsi_overbought(),
            macd_fast_period: default_macd_fast_period(),
            macd_slow_period: default_macd_slow_period(),
            bollinger_period: default_bollinger_period(),
            bollinger_std_dev: default_bollinger_std_dev(),
            williams_period: default_williams_period(),
            atr_period: default_atr_period(),
            volume_period: default_volume_period(),
            level_lookback: default_level_lookback(),
        }
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration for the Pulse Deck backend.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Address the REST API binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Symbols the dashboard is watching.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Kline interval requested from the exchange (e.g. "1h", "4h", "1d").
    #[serde(default = "default_kline_interval")]
    pub kline_interval: String,

    /// Number of candles requested per analysis (max 1000 at the exchange).
    #[serde(default = "default_kline_limit")]
    pub kline_limit: u32,

    /// TTL for cached feed responses, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Indicator periods and thresholds.
    #[serde(default)]
    pub indicators: IndicatorSettings,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            symbols: default_symbols(),
            kline_interval: default_kline_interval(),
            kline_limit: default_kline_limit(),
            cache_ttl_secs: default_cache_ttl_secs(),
            indicators: IndicatorSettings::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            interval = %config.kline_interval,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }
}
