//! Terminal rendering

use super::{DashboardState, Event};
use crate::advisor::{ChatMessage, Role};
use crate::market::{format_billions, format_inr, format_millions, logo_url, PriceQuote};
use crate::stats::DerivedStats;

const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the price section
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::from("CryptoKaro - Live Crypto Insights\n");

    if state.loading {
        out.push_str("Loading latest crypto data...\n");
        return out;
    }

    if let Some(error) = &state.error {
        out.push_str(&format!("! Could not refresh prices: {}\n", error));
    }
    if let Some(error) = &state.stats_error {
        out.push_str(&format!("! Market stats unavailable: {}\n", error));
    }

    match &state.prices {
        Some(prices) => {
            if let Some(at) = state.updated_at {
                out.push_str(&format!("Updated {}\n", at.format("%Y-%m-%d %H:%M:%S UTC")));
            }
            for quote in prices.quotes() {
                out.push('\n');
                out.push_str(&render_card(&quote, state.stats.get(&quote.symbol)));
            }
        }
        None => out.push_str("No price data available.\n"),
    }
    out
}

/// One price card
pub fn render_card(quote: &PriceQuote, stats: Option<&DerivedStats>) -> String {
    let title = format!("{} ({})", quote.symbol.display_name(), quote.symbol.ticker());
    let mut out = format!("{:<22}{:>20}\n", title, format_inr(quote.inr));
    if let Some(logo) = logo_url(quote.symbol.id()) {
        out.push_str(&format!("  {}\n", logo));
    }

    if let Some(stats) = stats {
        let arrow = if stats.is_positive() { '▲' } else { '▼' };
        out.push_str(&format!(
            "  {} {:+.2}%  Vol {}  MCap {}\n",
            arrow,
            stats.change_24h,
            format_millions(stats.volume as f64),
            format_billions(stats.market_cap)
        ));
        out.push_str(&format!("  {}\n", sparkline(&stats.chart_series)));
    }
    out
}

/// Unicode block sparkline scaled between the series min and max
pub fn sparkline(series: &[f64]) -> String {
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    series
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                return SPARK_BARS[0];
            }
            let idx = ((v - min) / span * (SPARK_BARS.len() - 1) as f64).round() as usize;
            SPARK_BARS[idx.min(SPARK_BARS.len() - 1)]
        })
        .collect()
}

/// One-line notice for events that need the user's attention
///
/// Only failures produce a notice, once per event.
pub fn render_event_notice(event: &Event) -> Option<String> {
    match event {
        Event::FetchFailed { error } => Some(format!("! Could not refresh prices: {}", error)),
        Event::StatsFailed { error } => Some(format!("! Market stats unavailable: {}", error)),
        _ => None,
    }
}

/// One chat line
pub fn render_message(message: &ChatMessage) -> String {
    let who = match message.role {
        Role::User => "You",
        Role::Bot => "Bot",
    };
    format!("{}: {}", who, message.text)
}
