// =============================================================================
// Exchange Market Data Client — public REST endpoints
// =============================================================================
//
// Only public (unsigned) endpoints are used: the dashboard reads prices, it
// never trades.  Responses are cached per URL with a short TTL so that rapid
// refresh cycles and coin switches do not hammer the provider's rate limits.
// =============================================================================

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::market_data::Candle;

/// 24-hour ticker statistics for a single trading pair.
#[derive(Debug, Clone, Serialize)]
pub struct Ticker {
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub quote_volume_24h: f64,
    pub open_price: f64,
    pub trades: u64,
}

struct CacheEntry {
    fetched_at: Instant,
    body: Value,
}

/// REST client for public exchange market data with a TTL response cache.
pub struct MarketDataClient {
    base_url: String,
    client: reqwest::Client,
    cache: RwLock<HashMap<String, CacheEntry>>,
    cache_ttl: Duration,
}

impl MarketDataClient {
    /// Create a new client. `cache_ttl` bounds how long an identical request
    /// is answered from memory instead of the network.
    pub fn new(cache_ttl: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        debug!("MarketDataClient initialised (base_url=https://api.binance.com)");

        Self {
            base_url: "https://api.binance.com".to_string(),
            client,
            cache: RwLock::new(HashMap::new()),
            cache_ttl,
        }
    }

    /// GET a JSON body through the TTL cache (keyed by full URL).
    async fn get_json(&self, url: &str) -> Result<Value> {
        if let Some(entry) = self.cache.read().get(url) {
            if entry.fetched_at.elapsed() < self.cache_ttl {
                debug!(%url, "feed cache hit");
                return Ok(entry.body.clone());
            }
        }

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url} request failed"))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))?;

        if !status.is_success() {
            anyhow::bail!("GET {url} returned {status}: {body}");
        }

        self.cache.write().insert(
            url.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                body: body.clone(),
            },
        );

        Ok(body)
    }

    /// GET /api/v3/ticker/24hr for one symbol.
    #[instrument(skip(self), name = "market::get_ticker")]
    pub async fn get_ticker(&self, symbol: &str) -> Result<Ticker> {
        let url = format!("{}/api/v3/ticker/24hr?symbol={}", self.base_url, symbol);
        let body = self.get_json(&url).await?;
        let ticker = parse_ticker(symbol, &body)?;
        debug!(symbol, price = ticker.price, "ticker fetched");
        Ok(ticker)
    }

    /// GET /api/v3/klines — OHLCV candles, oldest first.
    ///
    /// Array indices in the provider payload:
    ///   [0] openTime, [1] open, [2] high, [3] low, [4] close, [5] volume,
    ///   [6] closeTime, [7] quoteAssetVolume
    #[instrument(skip(self), name = "market::get_klines")]
    pub async fn get_klines(&self, symbol: &str, interval: &str, limit: u32) -> Result<Vec<Candle>> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );
        let body = self.get_json(&url).await?;
        let candles = parse_klines(&body)?;
        debug!(symbol, interval, count = candles.len(), "klines fetched");
        Ok(candles)
    }
}

// =============================================================================
// Payload parsing
// =============================================================================

/// Parse a numeric field that the provider encodes as a JSON string.
fn parse_str_f64(value: &Value) -> Result<f64> {
    value
        .as_str()
        .context("expected string-encoded number")?
        .parse::<f64>()
        .context("failed to parse numeric field")
}

fn parse_ticker(symbol: &str, body: &Value) -> Result<Ticker> {
    Ok(Ticker {
        symbol: symbol.to_string(),
        price: parse_str_f64(&body["lastPrice"]).context("ticker missing lastPrice")?,
        change_24h: parse_str_f64(&body["priceChangePercent"])
            .context("ticker missing priceChangePercent")?,
        high_24h: parse_str_f64(&body["highPrice"]).context("ticker missing highPrice")?,
        low_24h: parse_str_f64(&body["lowPrice"]).context("ticker missing lowPrice")?,
        quote_volume_24h: parse_str_f64(&body["quoteVolume"])
            .context("ticker missing quoteVolume")?,
        open_price: parse_str_f64(&body["openPrice"]).context("ticker missing openPrice")?,
        trades: body["count"].as_u64().unwrap_or(0),
    })
}

fn parse_klines(body: &Value) -> Result<Vec<Candle>> {
    let raw = body.as_array().context("klines response is not an array")?;

    let mut candles = Vec::with_capacity(raw.len());
    for entry in raw {
        let arr = entry.as_array().context("kline entry is not an array")?;

        if arr.len() < 8 {
            warn!("skipping malformed kline entry with {} elements", arr.len());
            continue;
        }

        let open_time = arr[0].as_i64().unwrap_or(0);
        let open = parse_str_f64(&arr[1])?;
        let high = parse_str_f64(&arr[2])?;
        let low = parse_str_f64(&arr[3])?;
        let close = parse_str_f64(&arr[4])?;
        let volume = parse_str_f64(&arr[5])?;
        let close_time = arr[6].as_i64().unwrap_or(0);
        let quote_volume = parse_str_f64(&arr[7])?;

        candles.push(Candle::new(
            open_time,
            open,
            high,
            low,
            close,
            volume,
            quote_volume,
            close_time,
        ));
    }

    Ok(candles)
}
