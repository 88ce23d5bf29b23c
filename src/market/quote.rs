//! Price quote types

use super::{MarketError, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single INR spot quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: Symbol,
    /// Spot price in Indian rupees, always positive
    pub inr: Decimal,
}

/// Wire shape of one entry: `{ "inr": 1234.5 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InrPrice {
    inr: Decimal,
}

/// Quotes for every supported symbol
///
/// Serializes as `{ "bitcoin": { "inr": .. }, "ethereum": { "inr": .. }, .. }`.
/// A snapshot always holds exactly the six fixed symbols with a positive
/// price each; deserialization rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Symbol, InrPrice>",
    try_from = "BTreeMap<Symbol, InrPrice>"
)]
pub struct PriceSnapshot {
    prices: BTreeMap<Symbol, Decimal>,
}

impl PriceSnapshot {
    /// Build a snapshot, failing if any symbol is missing or non-positive
    pub fn new(prices: BTreeMap<Symbol, Decimal>) -> Result<Self, MarketError> {
        for symbol in Symbol::ALL {
            match prices.get(&symbol) {
                None => return Err(MarketError::MissingPrice(symbol)),
                Some(p) if *p <= Decimal::ZERO => {
                    return Err(MarketError::NonPositivePrice(symbol, *p))
                }
                Some(_) => {}
            }
        }
        Ok(Self { prices })
    }

    /// Price for one symbol
    pub fn inr(&self, symbol: Symbol) -> Decimal {
        // Every symbol is present by construction
        self.prices.get(&symbol).copied().unwrap_or_default()
    }

    /// Quotes in display order
    pub fn quotes(&self) -> Vec<PriceQuote> {
        self.prices
            .iter()
            .map(|(symbol, inr)| PriceQuote {
                symbol: *symbol,
                inr: *inr,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<PriceSnapshot> for BTreeMap<Symbol, InrPrice> {
    fn from(snapshot: PriceSnapshot) -> Self {
        snapshot
            .prices
            .into_iter()
            .map(|(symbol, inr)| (symbol, InrPrice { inr }))
            .collect()
    }
}

impl TryFrom<BTreeMap<Symbol, InrPrice>> for PriceSnapshot {
    type Error = MarketError;

    fn try_from(map: BTreeMap<Symbol, InrPrice>) -> Result<Self, Self::Error> {
        Self::new(map.into_iter().map(|(s, p)| (s, p.inr)).collect())
    }
}
