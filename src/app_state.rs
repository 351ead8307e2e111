// =============================================================================
// Central Application State — Pulse Deck backend
// =============================================================================
//
// Shared by every request handler via `Arc<AppState>`.  The indicator core is
// stateless — the only mutable state here is the hot-reloadable runtime
// config; the feed clients manage their own response caches internally.

use std::time::Duration;

use parking_lot::RwLock;

use crate::feeds::{MarketDataClient, SentimentClient};
use crate::runtime_config::RuntimeConfig;

/// Application state shared across all request handlers.
pub struct AppState {
    /// Hot-reloadable configuration.
    pub runtime_config: RwLock<RuntimeConfig>,

    /// Exchange market-data client (ticker + klines).
    pub market: MarketDataClient,

    /// Sentiment index client.
    pub sentiment: SentimentClient,
}

impl AppState {
    pub fn new(config: RuntimeConfig) -> Self {
        let market = MarketDataClient::new(Duration::from_secs(config.cache_ttl_secs));
        Self {
            runtime_config: RwLock::new(config),
            market,
            sentiment: SentimentClient::new(),
        }
    }
}
