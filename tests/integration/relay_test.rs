//! Relay against a fake upstream

use crate::common::{spawn_router, spawn_upstream, Canned, SIX_PRICES};
use axum::http::{HeaderValue, StatusCode};
use crypto_karo::relay::{
    router, AppState, CoingeckoClient, UpstreamConfig, CRYPTO_ROUTE, GENERIC_ERROR_BODY,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const ORIGIN: &str = "https://rajfreakinraushan.github.io";

async fn spawn_relay(upstream_url: String, timeout: Duration) -> String {
    let client = CoingeckoClient::with_config(UpstreamConfig {
        base_url: upstream_url,
        timeout,
    })
    .unwrap();
    let app = router(
        AppState::new(Arc::new(client)),
        HeaderValue::from_static(ORIGIN),
    );
    spawn_router(app).await
}

async fn relay_for(canned: Canned) -> String {
    let upstream = spawn_upstream(canned).await;
    spawn_relay(upstream, Duration::from_secs(5)).await
}

#[tokio::test]
async fn test_relays_six_positive_prices() {
    let relay = relay_for(Canned::ok(SIX_PRICES)).await;

    let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 6);
    for id in ["bitcoin", "ethereum", "tether", "ripple", "binancecoin", "solana"] {
        let inr = map[id]["inr"].as_f64().unwrap();
        assert!(inr > 0.0, "{} should have a positive price", id);
    }
    assert_eq!(map["tether"]["inr"].as_f64().unwrap(), 83.12);
}

#[tokio::test]
async fn test_upstream_error_statuses_become_generic_500() {
    for status in [StatusCode::TOO_MANY_REQUESTS, StatusCode::BAD_GATEWAY] {
        let relay = relay_for(Canned::status(status, "{}")).await;
        let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.text().await.unwrap(), GENERIC_ERROR_BODY);
    }
}

#[tokio::test]
async fn test_malformed_upstream_body_is_500() {
    let relay = relay_for(Canned::ok("not json at all")).await;
    let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), GENERIC_ERROR_BODY);
}

#[tokio::test]
async fn test_missing_symbol_is_500() {
    let relay = relay_for(Canned::ok(r#"{"bitcoin": {"inr": 1.0}}"#)).await;
    let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn test_upstream_timeout_is_500() {
    let mut canned = Canned::ok(SIX_PRICES);
    canned.delay = Duration::from_secs(2);
    let upstream = spawn_upstream(canned).await;
    let relay = spawn_relay(upstream, Duration::from_millis(200)).await;

    let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), GENERIC_ERROR_BODY);
}

#[tokio::test]
async fn test_every_request_hits_upstream() {
    let canned = Canned::ok(SIX_PRICES);
    let relay = relay_for(canned.clone()).await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let resp = reqwest::get(format!("{}{}", relay, CRYPTO_ROUTE))
            .await
            .unwrap();
        bodies.push(resp.json::<Value>().await.unwrap());
    }
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(canned.hits(), 2);
}

#[tokio::test]
async fn test_cors_header_for_allowed_origin() {
    let relay = relay_for(Canned::ok(SIX_PRICES)).await;
    let resp = reqwest::Client::new()
        .get(format!("{}{}", relay, CRYPTO_ROUTE))
        .header("origin", ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        ORIGIN
    );
}
