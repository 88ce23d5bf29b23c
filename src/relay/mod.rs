//! Price relay
//!
//! Serves `GET /api/crypto`: one upstream call per request, reshaped to the
//! fixed six-symbol schema, or a generic 500.

mod error;
mod server;
mod upstream;

pub use error::{RelayError, GENERIC_ERROR_BODY};
pub use server::{router, serve, AppState, CRYPTO_ROUTE};
pub use upstream::{parse_simple_price, CoingeckoClient, UpstreamConfig, COINGECKO_API_URL};

use crate::market::PriceSnapshot;
use async_trait::async_trait;

/// Trait for upstream price sources
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch a fresh snapshot of all supported symbols
    async fn fetch(&self) -> Result<PriceSnapshot, RelayError>;
}
