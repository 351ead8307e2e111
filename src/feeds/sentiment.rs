// =============================================================================
// Market Sentiment Client — Fear & Greed index
// =============================================================================
//
// The index is a 0-100 gauge published by alternative.me. Its value feeds the
// five-bucket sentiment ladder in `signals::interpret`.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// The latest sentiment index reading.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentIndex {
    /// Index value in [0, 100].
    pub value: u32,
    /// Provider classification text (e.g. "Extreme Fear", "Greed").
    pub label: String,
    /// Reading timestamp, epoch seconds.
    pub timestamp: i64,
}

/// HTTP client for the sentiment index endpoint.
pub struct SentimentClient {
    base_url: String,
    client: reqwest::Client,
}

impl SentimentClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: "https://api.alternative.me".to_string(),
            client,
        }
    }

    /// Fetch the most recent index reading.
    #[instrument(skip(self), name = "sentiment::get_index")]
    pub async fn get_index(&self) -> Result<SentimentIndex> {
        let url = format!("{}/fng/?limit=1", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET sentiment index request failed")?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .context("failed to parse sentiment index response")?;

        if !status.is_success() {
            anyhow::bail!("GET {url} returned {status}: {body}");
        }

        let index = parse_index(&body)?;
        debug!(value = index.value, label = %index.label, "sentiment index fetched");
        Ok(index)
    }
}

impl Default for SentimentClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the provider payload. All numeric fields arrive string-encoded.
fn parse_index(body: &Value) -> Result<SentimentIndex> {
    let latest = body["data"]
        .as_array()
        .and_then(|entries| entries.first())
        .context("sentiment response carries no data entries")?;

    let value = latest["value"]
        .as_str()
        .context("sentiment entry missing value")?
        .parse::<u32>()
        .context("sentiment value is not an integer")?;

    let label = latest["value_classification"]
        .as_str()
        .unwrap_or("Unknown")
        .to_string();

    let timestamp = latest["timestamp"]
        .as_str()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0);

    Ok(SentimentIndex {
        value,
        label,
        timestamp,
    })
}
