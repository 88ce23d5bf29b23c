//! Advisor end to end: classification, rules and composed replies

use chrono::{TimeZone, Utc};
use crypto_karo::advisor::{
    classify, evaluate, fallback_message, DrawSampler, Intent, MarketDraw, MarketView,
    Recommendation, ReplyKind, Responder,
};
use crypto_karo::config::{AdvisorConfig, AdvisorMode};
use crypto_karo::market::{PriceSnapshot, Symbol};
use crypto_karo::stats::{DerivedStats, StatsMap};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn market() -> (PriceSnapshot, StatsMap) {
    let mut prices = BTreeMap::new();
    prices.insert(Symbol::Bitcoin, dec!(5612345.67));
    prices.insert(Symbol::Ethereum, dec!(298765.4));
    prices.insert(Symbol::Tether, dec!(83.12));
    prices.insert(Symbol::Ripple, dec!(52.3));
    prices.insert(Symbol::Binancecoin, dec!(49876));
    prices.insert(Symbol::Solana, dec!(12345.6));

    let stats = Symbol::ALL
        .into_iter()
        .map(|s| {
            (
                s,
                DerivedStats {
                    change_24h: 0.5,
                    volume: 500_000_000,
                    market_cap: 1.5e12,
                    chart_series: vec![50.0, 55.0, 60.0],
                },
            )
        })
        .collect();
    (PriceSnapshot::new(prices).unwrap(), stats)
}

fn seeded() -> Responder {
    Responder::new(DrawSampler::new(&AdvisorConfig {
        mode: AdvisorMode::Seeded,
        seed_window_secs: 60,
    }))
}

#[test]
fn test_recommendation_rule_table() {
    let d = |market_trend, volatility_index| MarketDraw {
        market_trend,
        volatility_index,
    };
    assert_eq!(evaluate(6.0, d(0.8, 2.0)), Recommendation::StrongBuy);
    assert_eq!(evaluate(-6.0, d(0.2, 8.0)), Recommendation::StrongSell);
    assert_eq!(evaluate(0.5, d(0.9, 9.9)), Recommendation::Hold);
    assert_eq!(evaluate(3.0, d(0.6, 5.0)), Recommendation::Buy);
    assert_eq!(evaluate(-4.0, d(0.35, 5.0)), Recommendation::Sell);
    assert_eq!(evaluate(2.5, d(0.45, 5.0)), Recommendation::HoldBuy);
    assert_eq!(evaluate(-2.5, d(0.45, 5.0)), Recommendation::HoldSell);
}

#[test]
fn test_advice_question_end_to_end() {
    let (prices, stats) = market();
    let view = MarketView {
        prices: Some(&prices),
        stats: &stats,
    };
    let c = classify("Should I buy Bitcoin?");
    assert_eq!(c.primary(), Some(Intent::Advice));

    let reply = seeded().respond_at("Should I buy Bitcoin?", view, Utc::now());
    assert_eq!(reply.kind, ReplyKind::Advice);
    assert!(reply.text.contains("Bitcoin (BTC)"));
    // |0.5| < 1.5 always lands on Hold regardless of the draw
    assert!(reply.text.contains("Hold"));
}

#[test]
fn test_comparison_end_to_end() {
    let (prices, stats) = market();
    let view = MarketView {
        prices: Some(&prices),
        stats: &stats,
    };
    let reply = seeded().respond("Compare Bitcoin and Solana", view);
    assert_eq!(reply.kind, ReplyKind::Comparison);
    assert!(reply.text.contains("Bitcoin"));
    assert!(reply.text.contains("Solana"));
}

#[test]
fn test_unknown_message_fallback() {
    let stats = StatsMap::new();
    let view = MarketView {
        prices: None,
        stats: &stats,
    };
    let reply = Responder::default().respond("xyz", view);
    assert_eq!(reply.kind, ReplyKind::Fallback);
    assert_eq!(reply.text, fallback_message());
}

#[test]
fn test_seeded_answers_are_stable_within_window() {
    let (prices, stats) = market();
    let view = MarketView {
        prices: Some(&prices),
        stats: &stats,
    };
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 5).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 50).unwrap();

    let responder = seeded();
    let a = responder.respond_at("Will Solana go up tomorrow?", view, at);
    let b = responder.respond_at("Will Solana go up tomorrow?", view, later);
    assert_eq!(a.kind, ReplyKind::Prediction);
    assert_eq!(a, b);
}
