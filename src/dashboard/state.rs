//! Dashboard view-model
//!
//! The whole UI state is one immutable value. Every change goes through
//! [`reduce`], which returns a new state and never performs I/O.

use crate::advisor::{ChatMessage, MarketView, GREETING};
use crate::market::PriceSnapshot;
use crate::stats::StatsMap;
use chrono::{DateTime, Utc};

/// Everything the dashboard and chat render from
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// True until the first fetch completes either way
    pub loading: bool,
    /// Last successfully fetched prices
    pub prices: Option<PriceSnapshot>,
    /// Derived stats for `prices`
    pub stats: StatsMap,
    /// Last fetch error, cleared by the next success
    pub error: Option<String>,
    /// Last stats error; prices may still be current
    pub stats_error: Option<String>,
    /// Chat transcript, append-only
    pub messages: Vec<ChatMessage>,
    /// A bot reply is pending
    pub typing: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// State transitions
#[derive(Debug, Clone)]
pub enum Event {
    FetchSucceeded {
        prices: PriceSnapshot,
        stats: StatsMap,
        at: DateTime<Utc>,
    },
    FetchFailed {
        error: String,
    },
    /// Prices arrived but stats could not be derived
    StatsFailed {
        error: String,
    },
    /// Fresh stats for the prices already shown
    Tick {
        stats: StatsMap,
    },
    /// User submitted a chat message
    MessageSent(String),
    /// Bot reply is ready
    ReplyReady(String),
}

impl DashboardState {
    /// Loading, no data, greeting in the transcript
    pub fn initial() -> Self {
        Self {
            loading: true,
            prices: None,
            stats: StatsMap::new(),
            error: None,
            stats_error: None,
            messages: vec![ChatMessage::bot(GREETING)],
            typing: false,
            updated_at: None,
        }
    }

    /// Market data for the advisor
    pub fn market(&self) -> MarketView<'_> {
        MarketView {
            prices: self.prices.as_ref(),
            stats: &self.stats,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Apply one event
pub fn reduce(state: &DashboardState, event: Event) -> DashboardState {
    let mut next = state.clone();
    match event {
        Event::FetchSucceeded { prices, stats, at } => {
            next.loading = false;
            next.prices = Some(prices);
            next.stats = stats;
            next.error = None;
            next.stats_error = None;
            next.updated_at = Some(at);
        }
        Event::FetchFailed { error } => {
            // Keep whatever was shown before; only surface the error
            next.loading = false;
            next.error = Some(error);
        }
        Event::StatsFailed { error } => {
            next.stats_error = Some(error);
        }
        Event::Tick { stats } => {
            if next.prices.is_some() {
                next.stats = stats;
            }
        }
        Event::MessageSent(text) => {
            if text.trim().is_empty() {
                return next;
            }
            next.messages.push(ChatMessage::user(text));
            next.typing = true;
        }
        Event::ReplyReady(text) => {
            next.messages.push(ChatMessage::bot(text));
            next.typing = false;
        }
    }
    next
}
