//! HTTP server for the relay endpoint

use super::{CoingeckoClient, PriceSource, RelayError, UpstreamConfig};
use crate::config::{RelayConfig, UpstreamSettings};
use crate::market::PriceSnapshot;
use crate::telemetry::{increment, CounterMetric};
use anyhow::Context;
use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Path of the single relay endpoint
pub const CRYPTO_ROUTE: &str = "/api/crypto";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn PriceSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self { source }
    }
}

async fn get_crypto(State(state): State<AppState>) -> Result<Json<PriceSnapshot>, RelayError> {
    increment(CounterMetric::RelayRequests);

    match state.source.fetch().await {
        Ok(snapshot) => {
            tracing::debug!(symbols = snapshot.len(), "Relayed spot prices");
            Ok(Json(snapshot))
        }
        Err(e) => {
            increment(CounterMetric::UpstreamFailures);
            Err(e)
        }
    }
}

/// Build the relay router
///
/// Cross-origin requests are accepted only from `allowed_origin`.
pub fn router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::GET]);

    Router::new()
        .route(CRYPTO_ROUTE, get(get_crypto))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and run the relay until the process is stopped
pub async fn serve(relay: &RelayConfig, upstream: &UpstreamSettings) -> anyhow::Result<()> {
    let client = CoingeckoClient::with_config(UpstreamConfig::from(upstream))
        .context("Failed to create upstream HTTP client")?;
    let origin = HeaderValue::from_str(&relay.allowed_origin)
        .with_context(|| format!("Invalid allowed_origin: {}", relay.allowed_origin))?;

    let app = router(AppState::new(Arc::new(client)), origin);

    let listener = tokio::net::TcpListener::bind(&relay.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", relay.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        origin = %relay.allowed_origin,
        "Relay listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
