//! Templated chat replies
//!
//! Picks a template from the classified intent and fills it with the
//! current prices and derived stats. Never fails: anything it cannot answer
//! gets a fixed fallback.

use super::intent::{classify, Classification, Intent};
use super::recommendation::{advise, DrawSampler};
use crate::market::{format_billions, format_inr, PriceSnapshot, Symbol};
use crate::stats::{DerivedStats, StatsMap};
use crate::telemetry::record_reply;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Which template produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// No supported currency was mentioned
    Fallback,
    /// Currency recognised but prices not loaded yet
    NoData,
    Advice,
    Price,
    Info,
    Prediction,
    Comparison,
    /// Currency recognised, no specific intent
    General,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Fallback => "fallback",
            ReplyKind::NoData => "no_data",
            ReplyKind::Advice => "advice",
            ReplyKind::Price => "price",
            ReplyKind::Info => "info",
            ReplyKind::Prediction => "prediction",
            ReplyKind::Comparison => "comparison",
            ReplyKind::General => "general",
        }
    }
}

/// A bot reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Read-only view of the market data a reply may use
#[derive(Debug, Clone, Copy)]
pub struct MarketView<'a> {
    pub prices: Option<&'a PriceSnapshot>,
    pub stats: &'a StatsMap,
}

impl<'a> MarketView<'a> {
    fn lookup(&self, symbol: Symbol) -> Option<(Decimal, &'a DerivedStats)> {
        let price = self.prices?.inr(symbol);
        let stats = self.stats.get(&symbol)?;
        Some((price, stats))
    }
}

/// Reply used when no supported currency is recognised
pub fn fallback_message() -> String {
    let names: Vec<&str> = Symbol::ALL.iter().map(|s| s.display_name()).collect();
    let last = names.last().copied().unwrap_or_default();
    let rest = &names[..names.len().saturating_sub(1)];
    format!(
        "I couldn't find a supported cryptocurrency in your question. \
         Try asking about {} or {}.",
        rest.join(", "),
        last
    )
}

/// Keyword-driven chat responder
#[derive(Debug, Clone, Default)]
pub struct Responder {
    sampler: DrawSampler,
}

impl Responder {
    pub fn new(sampler: DrawSampler) -> Self {
        Self { sampler }
    }

    /// Answer a message using the current time for draws
    pub fn respond(&self, text: &str, market: MarketView<'_>) -> Reply {
        self.respond_at(text, market, Utc::now())
    }

    /// Answer a message as of `now`
    pub fn respond_at(&self, text: &str, market: MarketView<'_>, now: DateTime<Utc>) -> Reply {
        let classification = classify(text);
        let reply = self.compose(&classification, market, now);

        tracing::debug!(
            intents = ?classification.intents,
            mentioned = ?classification.mentioned,
            kind = reply.kind.as_str(),
            "Composed advisor reply"
        );
        record_reply(reply.kind.as_str());
        reply
    }

    fn compose(&self, c: &Classification, market: MarketView<'_>, now: DateTime<Utc>) -> Reply {
        let Some(&first) = c.mentioned.first() else {
            return Reply::new(ReplyKind::Fallback, fallback_message());
        };

        if c.has(Intent::Advice) {
            return match market.lookup(first) {
                Some((price, stats)) => self.advice(first, price, stats, now),
                None => no_data(first),
            };
        }
        if c.has(Intent::Price) {
            return price_reply(&c.mentioned, market);
        }
        if c.has(Intent::Info) {
            return info_reply(first, market);
        }
        if c.has(Intent::Prediction) {
            return self.prediction(first, now);
        }
        if c.has(Intent::Comparison) {
            if let Some((a, b)) = c.comparison_pair() {
                return comparison_reply(a, b, market);
            }
        }

        match market.lookup(first) {
            Some((price, stats)) => self.general(first, price, stats, now),
            None => no_data(first),
        }
    }

    fn advice(
        &self,
        symbol: Symbol,
        price: Decimal,
        stats: &DerivedStats,
        now: DateTime<Utc>,
    ) -> Reply {
        let advice = advise(symbol, stats.change_24h, self.sampler.draw(symbol, now));
        Reply::new(
            ReplyKind::Advice,
            format!(
                "{} ({}) at {}: {}\n{}\nRisk: {} | Timeframe: {}",
                symbol.display_name(),
                symbol.ticker(),
                format_inr(price),
                advice.recommendation,
                advice.reasoning,
                advice.risk,
                advice.timeframe
            ),
        )
    }

    fn prediction(&self, symbol: Symbol, now: DateTime<Utc>) -> Reply {
        let trend = self.sampler.draw(symbol, now).market_trend;
        let name = symbol.display_name();
        let text = if trend > 0.6 {
            format!(
                "Yes! The price of {} is likely to rise further. Holding might be a good option!",
                name
            )
        } else if trend < 0.4 {
            format!(
                "The price of {} is showing a downward trend. Selling might be a safer option!",
                name
            )
        } else {
            format!(
                "The price of {} is stable for now. You can hold it and wait for better opportunities.",
                name
            )
        };
        Reply::new(ReplyKind::Prediction, text)
    }

    fn general(
        &self,
        symbol: Symbol,
        price: Decimal,
        stats: &DerivedStats,
        now: DateTime<Utc>,
    ) -> Reply {
        let advice = advise(symbol, stats.change_24h, self.sampler.draw(symbol, now));
        Reply::new(
            ReplyKind::General,
            format!(
                "{} is trading at {} ({:+.2}% in 24h). Current outlook: {}. \
                 Ask me about its price, future trend, or whether to buy or sell.",
                symbol.display_name(),
                format_inr(price),
                stats.change_24h,
                advice.recommendation
            ),
        )
    }
}

fn no_data(symbol: Symbol) -> Reply {
    Reply::new(
        ReplyKind::NoData,
        format!(
            "I don't have live data for {} yet. Please try again once prices have loaded.",
            symbol.display_name()
        ),
    )
}

fn price_reply(mentioned: &[Symbol], market: MarketView<'_>) -> Reply {
    let lines: Option<Vec<String>> = mentioned
        .iter()
        .map(|s| {
            market.lookup(*s).map(|(price, stats)| {
                format!(
                    "{} ({}) is trading at {} ({:+.2}% in 24h).",
                    s.display_name(),
                    s.ticker(),
                    format_inr(price),
                    stats.change_24h
                )
            })
        })
        .collect();

    match lines {
        Some(lines) => Reply::new(ReplyKind::Price, lines.join("\n")),
        None => no_data(mentioned[0]),
    }
}

fn info_reply(symbol: Symbol, market: MarketView<'_>) -> Reply {
    let mut text = symbol.description().to_string();
    if let Some((price, _)) = market.lookup(symbol) {
        text.push_str(&format!(" It currently trades at {}.", format_inr(price)));
    }
    Reply::new(ReplyKind::Info, text)
}

fn comparison_reply(a: Symbol, b: Symbol, market: MarketView<'_>) -> Reply {
    let (Some((price_a, stats_a)), Some((price_b, stats_b))) = (market.lookup(a), market.lookup(b))
    else {
        let missing = if market.lookup(a).is_none() { a } else { b };
        return no_data(missing);
    };

    let line = |s: Symbol, price: Decimal, stats: &DerivedStats| {
        format!(
            "- {}: {} | 24h {:+.2}% | Market cap {}",
            s.display_name(),
            format_inr(price),
            stats.change_24h,
            format_billions(stats.market_cap)
        )
    };
    let leader = if stats_a.change_24h >= stats_b.change_24h { a } else { b };

    Reply::new(
        ReplyKind::Comparison,
        format!(
            "{} vs {}:\n{}\n{}\n{} has the stronger 24h performance.",
            a.display_name(),
            b.display_name(),
            line(a, price_a, stats_a),
            line(b, price_b, stats_b),
            leader.display_name()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdvisorConfig, AdvisorMode};
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn snapshot() -> PriceSnapshot {
        PriceSnapshot::new(BTreeMap::from([
            (Symbol::Bitcoin, dec!(5612345)),
            (Symbol::Ethereum, dec!(301234.5)),
            (Symbol::Tether, dec!(83.61)),
            (Symbol::Ripple, dec!(52.3)),
            (Symbol::Binancecoin, dec!(51000)),
            (Symbol::Solana, dec!(12500.75)),
        ]))
        .unwrap()
    }

    fn stats_with_change(change: f64) -> StatsMap {
        Symbol::ALL
            .iter()
            .map(|s| {
                (
                    *s,
                    DerivedStats {
                        change_24h: change,
                        volume: 1_000_000,
                        market_cap: 2_000_000_000.0,
                        chart_series: vec![1.0; 30],
                    },
                )
            })
            .collect()
    }

    fn seeded() -> Responder {
        Responder::new(DrawSampler::new(&AdvisorConfig {
            mode: AdvisorMode::Seeded,
            seed_window_secs: 60,
        }))
    }

    #[test]
    fn test_fallback_lists_all_assets() {
        let stats = StatsMap::new();
        let reply = Responder::default().respond(
            "xyz",
            MarketView {
                prices: None,
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::Fallback);
        for symbol in Symbol::ALL {
            assert!(reply.text.contains(symbol.display_name()));
        }
        assert!(reply.text.contains("BNB or Solana."));
    }

    #[test]
    fn test_advice_small_change_is_hold() {
        let prices = snapshot();
        let stats = stats_with_change(0.5);
        let market = MarketView {
            prices: Some(&prices),
            stats: &stats,
        };
        for _ in 0..20 {
            let reply = Responder::default().respond("Should I buy Bitcoin right now?", market);
            assert_eq!(reply.kind, ReplyKind::Advice);
            assert!(reply.text.starts_with("Bitcoin (BTC) at ₹56,12,345: Hold\n"));
            assert!(reply.text.contains("Risk: Low | Timeframe: Wait and watch"));
        }
    }

    #[test]
    fn test_advice_without_data() {
        let stats = StatsMap::new();
        let reply = Responder::default().respond(
            "should i sell solana",
            MarketView {
                prices: None,
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::NoData);
        assert!(reply.text.contains("Solana"));
    }

    #[test]
    fn test_price_lists_every_mention() {
        let prices = snapshot();
        let stats = stats_with_change(-1.2);
        let reply = Responder::default().respond(
            "price of eth and xrp",
            MarketView {
                prices: Some(&prices),
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::Price);
        assert_eq!(
            reply.text,
            "Ethereum (ETH) is trading at ₹3,01,234.5 (-1.20% in 24h).\n\
             Ripple (XRP) is trading at ₹52.3 (-1.20% in 24h)."
        );
    }

    #[test]
    fn test_info_works_without_prices() {
        let stats = StatsMap::new();
        let reply = Responder::default().respond(
            "tell me about tether",
            MarketView {
                prices: None,
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::Info);
        assert!(reply.text.starts_with("Tether (USDT) is a stablecoin"));
        assert!(!reply.text.contains("currently trades"));
    }

    #[test]
    fn test_prediction_uses_trend_templates() {
        let stats = StatsMap::new();
        let reply = Responder::default().respond(
            "forecast for solana",
            MarketView {
                prices: None,
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::Prediction);
        assert!(reply.text.contains("The price of Solana") || reply.text.starts_with("Yes!"));
    }

    #[test]
    fn test_comparison() {
        let prices = snapshot();
        let mut stats = stats_with_change(1.0);
        stats.get_mut(&Symbol::Solana).unwrap().change_24h = 3.5;
        let reply = Responder::default().respond(
            "Compare Bitcoin and Solana",
            MarketView {
                prices: Some(&prices),
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::Comparison);
        assert!(reply.text.starts_with("Bitcoin vs Solana:\n"));
        assert!(reply.text.contains("- Solana: ₹12,500.75 | 24h +3.50% | Market cap ₹2.00B"));
        assert!(reply.text.ends_with("Solana has the stronger 24h performance."));
    }

    #[test]
    fn test_comparison_with_one_mention_is_general() {
        let prices = snapshot();
        let stats = stats_with_change(0.2);
        let reply = Responder::default().respond(
            "compare bitcoin",
            MarketView {
                prices: Some(&prices),
                stats: &stats,
            },
        );
        assert_eq!(reply.kind, ReplyKind::General);
        assert!(reply.text.contains("Current outlook: Hold"));
    }

    #[test]
    fn test_seeded_replies_are_stable() {
        let prices = snapshot();
        let stats = stats_with_change(2.5);
        let market = MarketView {
            prices: Some(&prices),
            stats: &stats,
        };
        let responder = seeded();
        let now = Utc::now();
        let first = responder.respond_at("should i buy solana", market, now);
        let second = responder.respond_at("should i buy solana", market, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reply_kind_labels() {
        assert_eq!(ReplyKind::NoData.as_str(), "no_data");
        assert_eq!(ReplyKind::General.as_str(), "general");
    }
}
