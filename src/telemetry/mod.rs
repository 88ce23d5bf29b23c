//! Telemetry
//!
//! Structured logging through `tracing` and optional Prometheus metrics.

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{
    increment, init_metrics, record_latency, record_reply, CounterMetric, LatencyMetric,
};

use crate::config::TelemetryConfig;

/// Keeps telemetry alive for the lifetime of the process
///
/// Dropping it flushes a final log line; the subscriber and exporter are
/// global and stay installed.
pub struct TelemetryGuard {
    metrics_port: Option<u16>,
}

impl TelemetryGuard {
    /// Port the Prometheus exporter listens on, if enabled
    pub fn metrics_port(&self) -> Option<u16> {
        self.metrics_port
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(metrics_port = ?self.metrics_port, "Telemetry shutting down");
    }
}

/// Install logging, then the metrics exporter when a port is configured
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    if let Some(port) = config.metrics_port {
        init_metrics(port)?;
    }

    Ok(TelemetryGuard {
        metrics_port: config.metrics_port,
    })
}
