//! Pseudo-random stats
//!
//! Nothing here reflects real market behaviour. Every call draws new values.

use super::{DerivedStats, StatsError, StatsMap, StatsSource};
use crate::market::PriceSnapshot;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use std::sync::Mutex;

/// Number of points in a chart series
pub const CHART_POINTS: usize = 30;

/// Chart values never drop below this floor
const CHART_FLOOR: f64 = 10.0;

/// Random stats generator
pub struct SyntheticStats {
    rng: Mutex<StdRng>,
}

impl SyntheticStats {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw stats for one symbol at the given INR price
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, price: f64) -> DerivedStats {
        let change_24h = (rng.gen_range(-5.0..=5.0_f64) * 100.0).round() / 100.0;
        let volume = rng.gen_range(0..1_000_000_000u64);
        let market_cap = price * rng.gen_range(1.0e6..2.0e8);

        DerivedStats {
            change_24h,
            volume,
            market_cap,
            chart_series: random_walk(rng),
        }
    }

    /// Draw stats for every symbol in the snapshot
    pub fn generate_all(&self, snapshot: &PriceSnapshot) -> StatsMap {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        snapshot
            .quotes()
            .into_iter()
            .map(|q| {
                let price = q.inr.to_f64().unwrap_or_default();
                (q.symbol, Self::generate(&mut *rng, price))
            })
            .collect()
    }
}

impl Default for SyntheticStats {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsSource for SyntheticStats {
    async fn stats(&self, snapshot: &PriceSnapshot) -> Result<StatsMap, StatsError> {
        Ok(self.generate_all(snapshot))
    }
}

/// Random walk starting in [50, 100) with steps in [-5, 5)
fn random_walk<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    let mut value: f64 = rng.gen_range(50.0..100.0);
    (0..CHART_POINTS)
        .map(|_| {
            value = (value + rng.gen_range(-5.0..5.0)).max(CHART_FLOOR);
            value
        })
        .collect()
}
