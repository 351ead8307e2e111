// =============================================================================
// Feeds Module
// =============================================================================
//
// Async HTTP clients for the external data providers the dashboard reads:
// - Exchange market data (24h ticker, OHLCV klines) with a TTL response cache.
// - The 0-100 market sentiment index ("Fear & Greed").
//
// The indicator core never performs I/O; these clients produce the ordered
// series it consumes.

pub mod market;
pub mod sentiment;

pub use market::{MarketDataClient, Ticker};
pub use sentiment::{SentimentClient, SentimentIndex};
