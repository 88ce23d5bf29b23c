//! Configuration loading

use crypto_karo::config::{AdvisorMode, Config, StatsSourceKind};
use crypto_karo::telemetry::LogFormat;
use std::time::Duration;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.relay.bind_addr, "0.0.0.0:5000");
    assert_eq!(
        config.relay.allowed_origin,
        "https://rajfreakinraushan.github.io"
    );
    assert_eq!(config.upstream.base_url, "https://api.coingecko.com/api/v3");
    assert_eq!(config.upstream.timeout_secs, 10);
    assert_eq!(config.dashboard.poll_interval(), Duration::from_secs(60));
    assert_eq!(config.dashboard.typing_delay(), Duration::from_millis(1500));
    assert_eq!(config.advisor.mode, AdvisorMode::Fresh);
    assert_eq!(config.stats.source, StatsSourceKind::Synthetic);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    assert_eq!(config.telemetry.metrics_port, None);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [dashboard]
        typing_delay_ms = 0
        "#,
    )
    .unwrap();
    assert!(config.dashboard.typing_delay().is_zero());
    assert_eq!(config.dashboard.poll_interval_secs, 60);
    assert_eq!(config.relay.bind_addr, "0.0.0.0:5000");
}

#[test]
fn test_unknown_advisor_mode_rejected() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [advisor]
        mode = "chaotic"
        "#,
    );
    assert!(result.is_err());
}
