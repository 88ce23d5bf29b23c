//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Relay call to the upstream price API
    Upstream,
    /// Dashboard call to the relay
    RelayFetch,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Inbound `/api/crypto` requests
    RelayRequests,
    /// Requests that ended in the generic 500
    UpstreamFailures,
    /// Dashboard polls that failed
    DashboardFetchFailures,
}

impl LatencyMetric {
    fn name(&self) -> &'static str {
        match self {
            LatencyMetric::Upstream => "cryptokaro_relay_upstream_latency_ms",
            LatencyMetric::RelayFetch => "cryptokaro_dashboard_fetch_latency_ms",
        }
    }
}

impl CounterMetric {
    fn name(&self) -> &'static str {
        match self {
            CounterMetric::RelayRequests => "cryptokaro_relay_requests_total",
            CounterMetric::UpstreamFailures => "cryptokaro_relay_upstream_failures_total",
            CounterMetric::DashboardFetchFailures => "cryptokaro_dashboard_fetch_failures_total",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    ::metrics::histogram!(metric.name()).record(ms);
    tracing::trace!(metric = metric.name(), value_ms = ms, "Recording latency");
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    ::metrics::counter!(metric.name()).increment(1);
}

/// Count one advisor reply, labelled by the intent that produced it
pub fn record_reply(intent: &'static str) {
    ::metrics::counter!("cryptokaro_advisor_replies_total", "intent" => intent).increment(1);
}

/// Install the Prometheus exporter on `0.0.0.0:port`
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}
