// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/` and are read-only: the backend serves
// market snapshots, it never trades.  Feed failures surface as 502 with a
// JSON error body so the dashboard can show a degraded state instead of
// coercing missing data to zero.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::analysis;
use crate::app_state::AppState;
use crate::format::{format_price, format_volume};
use crate::signals::interpret_sentiment;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/config", get(get_config))
        .route("/api/v1/ticker/:symbol", get(ticker))
        .route("/api/v1/analysis/:symbol", get(analysis_snapshot))
        .route("/api/v1/sentiment", get(sentiment))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "pulse-deck",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn get_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let config = state.runtime_config.read().clone();
    Json(config)
}

/// GET /api/v1/ticker/:symbol — 24h statistics with display strings.
async fn ticker(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    let symbol = match normalize_symbol(&symbol) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.market.get_ticker(&symbol).await {
        Ok(t) => (
            StatusCode::OK,
            Json(json!({
                "symbol": t.symbol,
                "price": t.price,
                "price_display": format_price(t.price),
                "change_24h": t.change_24h,
                "high_24h": t.high_24h,
                "low_24h": t.low_24h,
                "quote_volume_24h": t.quote_volume_24h,
                "volume_display": format_volume(t.quote_volume_24h),
                "open_price": t.open_price,
                "trades": t.trades,
            })),
        )
            .into_response(),
        Err(e) => feed_error("ticker", &symbol, e),
    }
}

/// GET /api/v1/analysis/:symbol — the full indicator snapshot.
async fn analysis_snapshot(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    let symbol = match normalize_symbol(&symbol) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let (interval, limit, settings) = {
        let config = state.runtime_config.read();
        (
            config.kline_interval.clone(),
            config.kline_limit,
            config.indicators.clone(),
        )
    };

    match state.market.get_klines(&symbol, &interval, limit).await {
        Ok(candles) => {
            let snapshot = analysis::analyze(&symbol, &candles, &settings);
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(e) => feed_error("klines", &symbol, e),
    }
}

/// GET /api/v1/sentiment — the 0-100 index plus its ladder classification.
async fn sentiment(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.sentiment.get_index().await {
        Ok(index) => {
            let classification = interpret_sentiment(index.value as f64);
            (
                StatusCode::OK,
                Json(json!({
                    "index": index,
                    "classification": classification,
                })),
            )
                .into_response()
        }
        Err(e) => feed_error("sentiment", "-", e),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Uppercase and validate a trading-pair path parameter.
fn normalize_symbol(symbol: &str) -> Result<String, axum::response::Response> {
    let upper = symbol.trim().to_uppercase();
    if upper.is_empty() || upper.len() > 20 || !upper.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid symbol" })),
        )
            .into_response());
    }
    Ok(upper)
}

/// Map an upstream feed failure to a 502 JSON body.
fn feed_error(feed: &str, symbol: &str, err: anyhow::Error) -> axum::response::Response {
    warn!(feed, symbol, error = %err, "upstream feed request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": format!("upstream {feed} feed unavailable") })),
    )
        .into_response()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_symbol_uppercases() {
        assert_eq!(normalize_symbol("btcusdt").unwrap(), "BTCUSDT");
        assert_eq!(normalize_symbol(" ethusdt ").unwrap(), "ETHUSDT");
    }

    #[test]
    fn normalize_symbol_rejects_garbage() {
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("BTC/USDT").is_err());
        assert!(normalize_symbol("a-very-long-symbol-name-x").is_err());
        assert!(normalize_symbol("btc usdt").is_err());
    }
}
