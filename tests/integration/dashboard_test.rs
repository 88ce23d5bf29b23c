//! Dashboard polling against a fake relay

use crate::common::{spawn_router, spawn_upstream, Canned, SIX_PRICES};
use axum::http::HeaderValue;
use crypto_karo::dashboard::{
    reduce, render_dashboard, ChatSession, DashboardState, Event, Poller, RelayClient,
};
use crypto_karo::advisor::{ReplyKind, Responder};
use crypto_karo::relay::{router, AppState, CoingeckoClient, UpstreamConfig};
use crypto_karo::stats::SyntheticStats;
use std::sync::Arc;
use std::time::Duration;

async fn spawn_relay(canned: Canned) -> String {
    let upstream = spawn_upstream(canned).await;
    let client = CoingeckoClient::with_config(UpstreamConfig {
        base_url: upstream,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    spawn_router(router(
        AppState::new(Arc::new(client)),
        HeaderValue::from_static("https://rajfreakinraushan.github.io"),
    ))
    .await
}

fn poller(base_url: &str) -> Poller {
    Poller::new(
        RelayClient::with_base_url(base_url),
        Arc::new(SyntheticStats::seeded(11)),
        Duration::from_millis(50),
    )
}

#[tokio::test]
async fn test_poll_renders_all_cards() {
    let relay = spawn_relay(Canned::ok(SIX_PRICES)).await;
    let mut poller = poller(&relay);

    let mut state = DashboardState::initial();
    for event in poller.poll_once().await {
        state = reduce(&state, event);
    }

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.stats.len(), 6);

    let out = render_dashboard(&state);
    for title in [
        "Bitcoin (BTC)",
        "Ethereum (ETH)",
        "Tether (USDT)",
        "Ripple (XRP)",
        "BNB (BNB)",
        "Solana (SOL)",
    ] {
        assert!(out.contains(title), "missing card {}", title);
    }
    assert!(out.contains("₹56,12,345.67"));
}

#[tokio::test]
async fn test_relay_failure_is_visible_and_keeps_nothing_stale() {
    let relay = spawn_relay(Canned::status(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        "{}",
    ))
    .await;
    let mut poller = poller(&relay);

    let events = poller.poll_once().await;
    assert_eq!(events.len(), 1);
    let state = reduce(&DashboardState::initial(), events[0].clone());
    assert!(state.error.is_some());
    assert!(state.prices.is_none());
    assert!(render_dashboard(&state).contains("Could not refresh prices"));
}

#[tokio::test]
async fn test_spawned_poller_fetches_immediately() {
    let canned = Canned::ok(SIX_PRICES);
    let relay = spawn_relay(canned.clone()).await;
    let mut events = poller(&relay).spawn();

    let first = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(first, Event::FetchSucceeded { .. }));
    assert!(canned.hits() >= 1);
}

#[tokio::test]
async fn test_chat_over_polled_prices() {
    let relay = spawn_relay(Canned::ok(SIX_PRICES)).await;
    let mut poller = poller(&relay);
    let mut session = ChatSession::new(Responder::default(), Duration::ZERO);
    for event in poller.poll_once().await {
        session.apply(event);
    }

    let reply = session.send("How much is XRP worth?").await.unwrap();
    assert_eq!(reply.kind, ReplyKind::Price);
    assert!(reply.text.contains("₹52.3"));
}
