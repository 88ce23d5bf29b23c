//! Market data errors

use super::Symbol;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected snapshot or symbol input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("missing price for {0}")]
    MissingPrice(Symbol),
    #[error("non-positive price for {0}: {1}")]
    NonPositivePrice(Symbol, Decimal),
    #[error("unsupported symbol: {0}")]
    UnknownSymbol(String),
}
