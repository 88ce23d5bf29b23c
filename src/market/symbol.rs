//! Supported currency symbols

use super::MarketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fiat currency every quote is expressed in
pub const TARGET_CURRENCY: &str = "inr";

/// A supported cryptocurrency, identified by its CoinGecko asset id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Bitcoin,
    Ethereum,
    Tether,
    Ripple,
    Binancecoin,
    Solana,
}

impl Symbol {
    /// All supported symbols, in display order
    pub const ALL: [Symbol; 6] = [
        Symbol::Bitcoin,
        Symbol::Ethereum,
        Symbol::Tether,
        Symbol::Ripple,
        Symbol::Binancecoin,
        Symbol::Solana,
    ];

    /// CoinGecko asset id (also the relay's JSON key)
    pub fn id(&self) -> &'static str {
        match self {
            Symbol::Bitcoin => "bitcoin",
            Symbol::Ethereum => "ethereum",
            Symbol::Tether => "tether",
            Symbol::Ripple => "ripple",
            Symbol::Binancecoin => "binancecoin",
            Symbol::Solana => "solana",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Symbol::Bitcoin => "Bitcoin",
            Symbol::Ethereum => "Ethereum",
            Symbol::Tether => "Tether",
            Symbol::Ripple => "Ripple",
            Symbol::Binancecoin => "BNB",
            Symbol::Solana => "Solana",
        }
    }

    /// Exchange ticker
    pub fn ticker(&self) -> &'static str {
        match self {
            Symbol::Bitcoin => "BTC",
            Symbol::Ethereum => "ETH",
            Symbol::Tether => "USDT",
            Symbol::Ripple => "XRP",
            Symbol::Binancecoin => "BNB",
            Symbol::Solana => "SOL",
        }
    }

    /// One-paragraph description used by the advisor's info replies
    pub fn description(&self) -> &'static str {
        match self {
            Symbol::Bitcoin => {
                "Bitcoin is the first decentralized cryptocurrency, launched in 2009. \
                 Its supply is capped at 21 million coins and it is secured by proof-of-work mining."
            }
            Symbol::Ethereum => {
                "Ethereum is a programmable blockchain that runs smart contracts. \
                 Ether pays for computation on the network, which moved to proof-of-stake in 2022."
            }
            Symbol::Tether => {
                "Tether (USDT) is a stablecoin pegged to the US dollar. \
                 It is mostly used to park value and move funds between exchanges."
            }
            Symbol::Ripple => {
                "XRP is the native asset of the XRP Ledger, built for fast and cheap \
                 cross-border payments and settlement between institutions."
            }
            Symbol::Binancecoin => {
                "BNB is the native coin of the BNB Chain ecosystem. \
                 It is used for transaction fees and trading fee discounts on Binance."
            }
            Symbol::Solana => {
                "Solana is a high-throughput smart contract platform known for \
                 low fees and sub-second block times."
            }
        }
    }

    /// Logo image URL
    pub fn logo_url(&self) -> &'static str {
        match self {
            Symbol::Bitcoin => "https://cryptologos.cc/logos/bitcoin-btc-logo.png?v=002",
            Symbol::Ethereum => "https://cryptologos.cc/logos/ethereum-eth-logo.png?v=002",
            Symbol::Tether => "https://cryptologos.cc/logos/tether-usdt-logo.png?v=002",
            Symbol::Ripple => "https://cryptologos.cc/logos/xrp-xrp-logo.png?v=002",
            Symbol::Binancecoin => "https://cryptologos.cc/logos/binance-coin-bnb-logo.png?v=002",
            Symbol::Solana => "https://cryptologos.cc/logos/solana-sol-logo.svg?v=023",
        }
    }

    /// Comma-separated id list for the upstream `ids` query parameter
    pub fn upstream_ids() -> String {
        Self::ALL
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Symbol {
    type Err = MarketError;

    /// Accepts the id, display name or ticker, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sym| {
                sym.id() == needle
                    || sym.display_name().to_lowercase() == needle
                    || sym.ticker().to_lowercase() == needle
            })
            .ok_or_else(|| MarketError::UnknownSymbol(s.to_string()))
    }
}

/// Logo lookup by asset id
///
/// Also knows litecoin, polygon and chainlink, which have a logo but no
/// price data behind them.
pub fn logo_url(id: &str) -> Option<&'static str> {
    if let Ok(symbol) = Symbol::from_str(id) {
        return Some(symbol.logo_url());
    }
    match id.to_lowercase().as_str() {
        "litecoin" => Some("https://cryptologos.cc/logos/litecoin-ltc-logo.png?v=002"),
        "polygon" => Some("https://cryptologos.cc/logos/polygon-matic-logo.png?v=002"),
        "chainlink" => Some("https://cryptologos.cc/logos/chainlink-link-logo.png?v=002"),
        _ => None,
    }
}
