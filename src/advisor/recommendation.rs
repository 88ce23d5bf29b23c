//! Rule-based recommendation engine
//!
//! Maps a symbol's 24h change plus a market draw (trend, volatility) to one
//! of seven labels. Rules are evaluated in order; the first match wins.

use crate::config::{AdvisorConfig, AdvisorMode};
use crate::market::Symbol;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    HoldBuy,
    HoldSell,
    Sell,
    StrongSell,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::HoldBuy => "Hold/Buy",
            Recommendation::HoldSell => "Hold/Sell",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
        }
    }

    /// Risk level shown alongside the label
    pub fn risk(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Moderate",
            Recommendation::Buy => "Moderate",
            Recommendation::Hold => "Low",
            Recommendation::HoldBuy => "Low to Moderate",
            Recommendation::HoldSell => "Moderate",
            Recommendation::Sell => "Moderate to High",
            Recommendation::StrongSell => "High",
        }
    }

    /// Suggested holding horizon
    pub fn timeframe(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Medium to long term",
            Recommendation::Buy => "Medium term",
            Recommendation::Hold => "Wait and watch",
            Recommendation::HoldBuy => "Medium term",
            Recommendation::HoldSell => "Short to medium term",
            Recommendation::Sell => "Short term",
            Recommendation::StrongSell => "Short term",
        }
    }

    fn reasoning(&self, name: &str, change_24h: f64) -> String {
        let abs = change_24h.abs();
        match self {
            Recommendation::StrongBuy => format!(
                "{} is up {:.2}% in the last 24 hours with strong market momentum and contained volatility. \
                 Conditions favour building a position.",
                name, abs
            ),
            Recommendation::Buy => format!(
                "{} has gained {:.2}% over 24 hours and the broader trend is supportive. \
                 A measured entry looks reasonable.",
                name, abs
            ),
            Recommendation::Hold => format!(
                "{} has moved {:+.2}% in 24 hours, which is within its normal range. \
                 There is no strong signal either way, so holding is the sensible choice.",
                name, change_24h
            ),
            Recommendation::HoldBuy => format!(
                "{} is up {:.2}% but momentum is mixed. Hold, and consider adding on dips.",
                name, abs
            ),
            Recommendation::HoldSell => format!(
                "{} is down {:.2}% without a clear bottom forming. Hold for now and tighten your stop-loss.",
                name, abs
            ),
            Recommendation::Sell => format!(
                "{} is down {:.2}% in 24 hours and the market trend is soft. Consider trimming your position.",
                name, abs
            ),
            Recommendation::StrongSell => format!(
                "{} has dropped {:.2}% in 24 hours amid weak sentiment and high volatility. \
                 Reducing exposure limits further downside.",
                name, abs
            ),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One draw of simulated market conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketDraw {
    /// Market trend in [0, 1)
    pub market_trend: f64,
    /// Volatility index in [0, 10)
    pub volatility_index: f64,
}

impl MarketDraw {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            market_trend: rng.gen_range(0.0..1.0),
            volatility_index: rng.gen_range(0.0..10.0),
        }
    }
}

/// Select a recommendation; first matching rule wins
pub fn evaluate(change_24h: f64, draw: MarketDraw) -> Recommendation {
    let MarketDraw {
        market_trend: trend,
        volatility_index: vol,
    } = draw;

    if change_24h > 5.0 && trend > 0.7 && vol < 7.0 {
        Recommendation::StrongBuy
    } else if change_24h > 2.0 && trend > 0.5 {
        Recommendation::Buy
    } else if change_24h < -5.0 && trend < 0.3 && vol > 7.0 {
        Recommendation::StrongSell
    } else if change_24h < -3.0 && trend < 0.4 {
        Recommendation::Sell
    } else if change_24h.abs() < 1.5 || (vol > 8.0 && change_24h.abs() < 3.0) {
        Recommendation::Hold
    } else if change_24h > 0.0 {
        Recommendation::HoldBuy
    } else {
        Recommendation::HoldSell
    }
}

/// A recommendation with its explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub symbol: Symbol,
    pub recommendation: Recommendation,
    pub change_24h: f64,
    pub draw: MarketDraw,
    pub reasoning: String,
    pub risk: &'static str,
    pub timeframe: &'static str,
}

/// Evaluate and fill in the templates for one symbol
pub fn advise(symbol: Symbol, change_24h: f64, draw: MarketDraw) -> Advice {
    let recommendation = evaluate(change_24h, draw);
    Advice {
        symbol,
        recommendation,
        change_24h,
        draw,
        reasoning: recommendation.reasoning(symbol.display_name(), change_24h),
        risk: recommendation.risk(),
        timeframe: recommendation.timeframe(),
    }
}

/// Produces market draws according to the configured [`AdvisorMode`]
#[derive(Debug, Clone)]
pub struct DrawSampler {
    mode: AdvisorMode,
    seed_window_secs: u64,
}

impl DrawSampler {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            mode: config.mode,
            seed_window_secs: config.seed_window_secs.max(1),
        }
    }

    pub fn mode(&self) -> AdvisorMode {
        self.mode
    }

    /// Draw conditions for `symbol` at time `now`
    ///
    /// Fresh mode ignores both arguments. Seeded mode returns the same draw
    /// for the same symbol within one time window.
    pub fn draw(&self, symbol: Symbol, now: DateTime<Utc>) -> MarketDraw {
        match self.mode {
            AdvisorMode::Fresh => MarketDraw::random(&mut rand::thread_rng()),
            AdvisorMode::Seeded => {
                let bucket = now.timestamp().max(0) as u64 / self.seed_window_secs;
                let mut rng = StdRng::seed_from_u64(fnv1a(symbol.id().as_bytes()) ^ bucket);
                MarketDraw::random(&mut rng)
            }
        }
    }
}

impl Default for DrawSampler {
    fn default() -> Self {
        Self::new(&AdvisorConfig::default())
    }
}

/// 64-bit FNV-1a; stable across builds, unlike `DefaultHasher`
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
