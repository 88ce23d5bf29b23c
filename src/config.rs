//! Configuration types for crypto-karo

use crate::relay::{UpstreamConfig, COINGECKO_API_URL};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Relay server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// The only origin allowed to call the relay cross-origin
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}
fn default_allowed_origin() -> String {
    "https://rajfreakinraushan.github.io".to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

/// Upstream price API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_upstream_url() -> String {
    COINGECKO_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl From<&UpstreamSettings> for UpstreamConfig {
    fn from(settings: &UpstreamSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

/// Dashboard client configuration
///
/// The relay URL is deliberately absent: it is fixed at build time.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Seconds between relay polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Simulated typing delay before a bot reply (milliseconds)
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

fn default_poll_interval_secs() -> u64 {
    60
}
fn default_typing_delay_ms() -> u64 {
    1500
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

impl DashboardConfig {
    /// Poll period; zero is raised to one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// Advisor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// How trend/volatility draws are produced
    #[serde(default)]
    pub mode: AdvisorMode,

    /// Width of the time bucket mixed into the seed (seeded mode only)
    #[serde(default = "default_seed_window_secs")]
    pub seed_window_secs: u64,
}

/// Randomness mode for recommendation draws
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorMode {
    /// Fresh draws on every call; repeated questions may get different answers
    #[default]
    Fresh,
    /// Draws seeded from symbol and time bucket; stable within a window
    Seeded,
}

fn default_seed_window_secs() -> u64 {
    60
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            mode: AdvisorMode::Fresh,
            seed_window_secs: default_seed_window_secs(),
        }
    }
}

/// Derived statistics source
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatsConfig {
    #[serde(default)]
    pub source: StatsSourceKind,
}

/// Which [`crate::stats::StatsSource`] backs the dashboard
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatsSourceKind {
    #[default]
    Synthetic,
    Coingecko,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus exporter port; no exporter when unset
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
