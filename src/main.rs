// =============================================================================
// Pulse Deck — Main Entry Point
// =============================================================================
//
// Backend for the crypto market dashboard: fetches market data and sentiment
// from public feeds and serves indicator snapshots over a small REST API.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod api;
mod app_state;
mod feeds;
mod format;
mod indicators;
mod market_data;
mod runtime_config;
mod signals;
mod types;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::runtime_config::RuntimeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║          Pulse Deck — Dashboard Backend                 ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let mut config = RuntimeConfig::load("runtime_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    // Override symbols from env if available.
    if let Ok(syms) = std::env::var("PULSE_SYMBOLS") {
        config.symbols = syms
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if config.symbols.is_empty() {
        config.symbols = vec![
            "BTCUSDT".into(),
            "ETHUSDT".into(),
            "XRPUSDT".into(),
            "BNBUSDT".into(),
            "SOLUSDT".into(),
        ];
    }
    if let Ok(addr) = std::env::var("PULSE_BIND_ADDR") {
        config.bind_addr = addr;
    }

    info!(symbols = ?config.symbols, interval = %config.kline_interval, "Configured watch list");

    // ── 2. Build shared state ────────────────────────────────────────────
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    // ── 3. Serve the API ─────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind API server on {bind_addr}: {e}"))?;
    info!(addr = %bind_addr, "API server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
