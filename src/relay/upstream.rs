//! CoinGecko simple-price client
//!
//! Fetches INR spot prices for the six supported symbols in one call and
//! reshapes the answer into a [`PriceSnapshot`]. No caching, no retry.

use super::{PriceSource, RelayError};
use crate::market::{PriceSnapshot, Symbol, TARGET_CURRENCY};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// CoinGecko public API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Configuration for the upstream client
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, without the `/simple/price` path
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for CoinGecko's `/simple/price` endpoint
pub struct CoingeckoClient {
    config: UpstreamConfig,
    client: Client,
}

impl CoingeckoClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, RelayError> {
        Self::with_config(UpstreamConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: UpstreamConfig) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn price_url(&self) -> String {
        format!("{}/simple/price", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch the current snapshot
    pub async fn fetch_prices(&self) -> Result<PriceSnapshot, RelayError> {
        let url = self.price_url();
        let ids = Symbol::upstream_ids();

        tracing::debug!(url = %url, ids = %ids, "Fetching spot prices");

        let started = Instant::now();
        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", TARGET_CURRENCY)])
            .header("accept", "application/json")
            .send()
            .await?;
        crate::telemetry::record_latency(
            crate::telemetry::LatencyMetric::Upstream,
            started.elapsed(),
        );

        if !response.status().is_success() {
            return Err(RelayError::Status(response.status()));
        }

        let body = response.bytes().await?;
        parse_simple_price(&body)
    }
}

#[async_trait]
impl PriceSource for CoingeckoClient {
    async fn fetch(&self) -> Result<PriceSnapshot, RelayError> {
        self.fetch_prices().await
    }
}

/// Reshape a `/simple/price` body into a snapshot
///
/// Format: `{"bitcoin": {"inr": 5612345}, "ethereum": {"inr": 301234.5}, ...}`.
/// Any missing symbol or `inr` field fails the whole payload.
pub fn parse_simple_price(body: &[u8]) -> Result<PriceSnapshot, RelayError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RelayError::Malformed(e.to_string()))?;

    let mut prices = BTreeMap::new();
    for symbol in Symbol::ALL {
        let raw = value
            .get(symbol.id())
            .ok_or_else(|| RelayError::Malformed(format!("missing key: {}", symbol.id())))?
            .get(TARGET_CURRENCY)
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                RelayError::Malformed(format!("missing {} price for {}", TARGET_CURRENCY, symbol))
            })?;
        let price = Decimal::from_f64(raw)
            .ok_or_else(|| RelayError::Malformed(format!("unrepresentable price: {}", raw)))?;
        prices.insert(symbol, price);
    }

    PriceSnapshot::new(prices).map_err(|e| RelayError::Malformed(e.to_string()))
}
