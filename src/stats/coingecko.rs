//! CoinGecko-backed stats
//!
//! Reads real 24h change, volume and market cap from `/simple/price` and a
//! one-day price series from `/coins/{id}/market_chart`.

use super::{DerivedStats, StatsError, StatsMap, StatsSource, CHART_POINTS};
use crate::market::{PriceSnapshot, Symbol, TARGET_CURRENCY};
use crate::relay::UpstreamConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Stats provider backed by the CoinGecko public API
pub struct CoingeckoStats {
    config: UpstreamConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    /// `[[unix_ms, price], ...]`
    prices: Vec<(f64, f64)>,
}

impl CoingeckoStats {
    pub fn with_config(config: UpstreamConfig) -> Result<Self, StatsError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StatsError> {
        let response = self.client.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(StatsError::Status(response.status()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| StatsError::Malformed(e.to_string()))
    }

    async fn fetch_market_chart(&self, symbol: Symbol) -> Result<Vec<f64>, StatsError> {
        let url = format!("{}/coins/{}/market_chart", self.base(), symbol.id());
        let chart: MarketChart = self
            .get_json(&url, &[("vs_currency", TARGET_CURRENCY), ("days", "1")])
            .await?;
        let prices: Vec<f64> = chart.prices.into_iter().map(|(_, p)| p).collect();
        Ok(resample(&prices, CHART_POINTS))
    }
}

#[async_trait]
impl StatsSource for CoingeckoStats {
    async fn stats(&self, snapshot: &PriceSnapshot) -> Result<StatsMap, StatsError> {
        let url = format!("{}/simple/price", self.base());
        let ids = Symbol::upstream_ids();
        let body: Value = self
            .get_json(
                &url,
                &[
                    ("ids", ids.as_str()),
                    ("vs_currencies", TARGET_CURRENCY),
                    ("include_24hr_change", "true"),
                    ("include_24hr_vol", "true"),
                    ("include_market_cap", "true"),
                ],
            )
            .await?;

        let mut out = StatsMap::new();
        for quote in snapshot.quotes() {
            let chart_series = self.fetch_market_chart(quote.symbol).await?;
            let stats = parse_market_fields(&body, quote.symbol, chart_series)?;
            out.insert(quote.symbol, stats);
        }

        tracing::debug!(symbols = out.len(), "Fetched market stats");
        Ok(out)
    }
}

/// Pull the `inr_*` fields for one symbol out of a `/simple/price` body
fn parse_market_fields(
    body: &Value,
    symbol: Symbol,
    chart_series: Vec<f64>,
) -> Result<DerivedStats, StatsError> {
    let entry = body
        .get(symbol.id())
        .ok_or_else(|| StatsError::Malformed(format!("missing key: {}", symbol.id())))?;
    let field = |suffix: &str| -> Result<f64, StatsError> {
        let key = format!("{}_{}", TARGET_CURRENCY, suffix);
        entry
            .get(&key)
            .and_then(Value::as_f64)
            .ok_or_else(|| StatsError::Malformed(format!("missing {} for {}", key, symbol)))
    };

    Ok(DerivedStats {
        change_24h: (field("24h_change")? * 100.0).round() / 100.0,
        volume: field("24h_vol")?.max(0.0) as u64,
        market_cap: field("market_cap")?,
        chart_series,
    })
}

/// Pick `points` evenly spaced samples, keeping the first and last
fn resample(series: &[f64], points: usize) -> Vec<f64> {
    if series.len() <= points || points < 2 {
        return series.to_vec();
    }
    let step = (series.len() - 1) as f64 / (points - 1) as f64;
    (0..points)
        .map(|i| series[(i as f64 * step).round() as usize])
        .collect()
}
