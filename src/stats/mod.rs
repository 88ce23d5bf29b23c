//! Derived market statistics
//!
//! 24h change, volume, market cap and a chart series per symbol. The relay
//! only supplies spot prices, so these come from a pluggable [`StatsSource`]:
//! [`SyntheticStats`] fabricates them, [`CoingeckoStats`] reads a real feed.

mod coingecko;
mod synthetic;

pub use coingecko::CoingeckoStats;
pub use synthetic::{SyntheticStats, CHART_POINTS};

use crate::config::{StatsConfig, StatsSourceKind, UpstreamSettings};
use crate::market::{PriceSnapshot, Symbol};
use crate::relay::UpstreamConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Per-symbol statistics shown on a card and fed to the advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// 24h change in percent
    pub change_24h: f64,
    /// 24h traded volume in INR
    pub volume: u64,
    /// Market capitalisation in INR
    pub market_cap: f64,
    /// Recent price series, oldest first
    pub chart_series: Vec<f64>,
}

impl DerivedStats {
    pub fn is_positive(&self) -> bool {
        self.change_24h > 0.0
    }
}

/// Stats keyed by symbol
pub type StatsMap = HashMap<Symbol, DerivedStats>;

/// Stats source errors
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Stats request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Stats feed returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed stats payload: {0}")]
    Malformed(String),
}

/// Trait for derived-statistics providers
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Produce stats for every symbol in the snapshot
    async fn stats(&self, snapshot: &PriceSnapshot) -> Result<StatsMap, StatsError>;
}

/// Build the configured stats source
pub fn build_source(
    config: &StatsConfig,
    upstream: &UpstreamSettings,
) -> Result<Arc<dyn StatsSource>, StatsError> {
    let source: Arc<dyn StatsSource> = match config.source {
        StatsSourceKind::Synthetic => Arc::new(SyntheticStats::new()),
        StatsSourceKind::Coingecko => {
            Arc::new(CoingeckoStats::with_config(UpstreamConfig::from(upstream))?)
        }
    };
    tracing::debug!(source = ?config.source, "Stats source ready");
    Ok(source)
}
