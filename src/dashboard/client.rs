//! HTTP client for the relay

use crate::market::PriceSnapshot;
use crate::relay::CRYPTO_ROUTE;
use crate::telemetry::{record_latency, LatencyMetric};
use reqwest::Client;
use std::time::Instant;
use thiserror::Error;

/// Relay used by debug builds
pub const DEV_RELAY_URL: &str = "http://localhost:5000";
/// Relay used by release builds
pub const PROD_RELAY_URL: &str = "https://crypto-project-nafm.onrender.com";

/// Relay base URL, fixed by the build profile
pub fn relay_base_url() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_RELAY_URL
    } else {
        PROD_RELAY_URL
    }
}

/// Dashboard fetch errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Relay unreachable or connection dropped
    #[error("Relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// Relay answered with an error status
    #[error("Relay returned status {0}")]
    Status(reqwest::StatusCode),
    /// Body is not a valid price snapshot
    #[error("Invalid relay response: {0}")]
    Decode(String),
}

/// Client for `GET /api/crypto`
pub struct RelayClient {
    base_url: String,
    client: Client,
}

impl RelayClient {
    /// Client for the build-time relay URL
    pub fn new() -> Self {
        Self::with_base_url(relay_base_url())
    }

    /// Client for an explicit relay, used by tests
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current snapshot from the relay
    pub async fn fetch(&self) -> Result<PriceSnapshot, ClientError> {
        let url = format!("{}{}", self.base_url, CRYPTO_ROUTE);
        let started = Instant::now();

        let response = self.client.get(&url).send().await?;
        record_latency(LatencyMetric::RelayFetch, started.elapsed());

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}
