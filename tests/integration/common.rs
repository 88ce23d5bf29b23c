//! Fake HTTP servers shared by the integration tests

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const SIX_PRICES: &str = r#"{
    "bitcoin": {"inr": 5612345.67},
    "ethereum": {"inr": 298765.4},
    "tether": {"inr": 83.12},
    "ripple": {"inr": 52.3},
    "binancecoin": {"inr": 49876.0},
    "solana": {"inr": 12345.6}
}"#;

/// Canned response for the fake CoinGecko
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: &'static str,
    pub delay: Duration,
    pub hits: Arc<AtomicUsize>,
}

impl Canned {
    pub fn ok(body: &'static str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn canned(State(c): State<Canned>) -> (StatusCode, &'static str) {
    c.hits.fetch_add(1, Ordering::SeqCst);
    if !c.delay.is_zero() {
        tokio::time::sleep(c.delay).await;
    }
    (c.status, c.body)
}

async fn bind(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake CoinGecko; returns the `/api/v3` base URL
pub async fn spawn_upstream(canned_response: Canned) -> String {
    let app = Router::new()
        .route("/api/v3/simple/price", get(canned))
        .with_state(canned_response);
    format!("{}/api/v3", bind(app).await)
}

/// Any router on an ephemeral port; returns its base URL
pub async fn spawn_router(app: Router) -> String {
    bind(app).await
}
