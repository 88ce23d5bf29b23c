//! Periodic relay polling
//!
//! Fetches once immediately, then on every interval, and turns each outcome
//! into [`Event`]s on a channel.

use super::{Event, RelayClient};
use crate::market::PriceSnapshot;
use crate::stats::{StatsMap, StatsSource};
use crate::telemetry::{increment, CounterMetric};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Shortest interval the poller will run at
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polls the relay and derives stats for each snapshot
pub struct Poller {
    client: RelayClient,
    stats: Arc<dyn StatsSource>,
    interval: Duration,
    last_prices: Option<PriceSnapshot>,
    last_stats: StatsMap,
}

impl Poller {
    /// `interval` is raised to [`MIN_POLL_INTERVAL`] if shorter
    pub fn new(client: RelayClient, stats: Arc<dyn StatsSource>, interval: Duration) -> Self {
        Self {
            client,
            stats,
            interval: interval.max(MIN_POLL_INTERVAL),
            last_prices: None,
            last_stats: StatsMap::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One poll: fetch prices, then derive stats
    ///
    /// A failed fetch yields `FetchFailed`, followed by a `Tick` with fresh
    /// stats when earlier prices are still on screen. A stats failure still
    /// publishes the new prices (with the last good stats) and then reports
    /// `StatsFailed`.
    pub async fn poll_once(&mut self) -> Vec<Event> {
        let prices = match self.client.fetch().await {
            Ok(prices) => prices,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching data");
                increment(CounterMetric::DashboardFetchFailures);
                return self.fetch_failed(e.to_string()).await;
            }
        };
        self.last_prices = Some(prices.clone());

        match self.stats.stats(&prices).await {
            Ok(stats) => {
                tracing::debug!(base_url = %self.client.base_url(), "Fetched prices");
                self.last_stats = stats.clone();
                vec![Event::FetchSucceeded {
                    prices,
                    stats,
                    at: Utc::now(),
                }]
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stats source failed");
                vec![
                    Event::FetchSucceeded {
                        prices,
                        stats: self.last_stats.clone(),
                        at: Utc::now(),
                    },
                    Event::StatsFailed {
                        error: e.to_string(),
                    },
                ]
            }
        }
    }

    async fn fetch_failed(&mut self, error: String) -> Vec<Event> {
        let mut events = vec![Event::FetchFailed { error }];
        if let Some(prices) = &self.last_prices {
            if let Ok(stats) = self.stats.stats(prices).await {
                self.last_stats = stats.clone();
                events.push(Event::Tick { stats });
            }
        }
        events
    }

    /// Run until the receiver is dropped
    pub async fn run(mut self, tx: mpsc::Sender<Event>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            for event in self.poll_once().await {
                if tx.send(event).await.is_err() {
                    tracing::debug!("Event receiver dropped, stopping poller");
                    return;
                }
            }
        }
    }

    /// Spawn the polling loop and return its event stream
    pub fn spawn(self) -> mpsc::Receiver<Event> {
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(self.run(tx));
        rx
    }
}
