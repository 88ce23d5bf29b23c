//! CLI interface for crypto-karo
//!
//! Provides subcommands for:
//! - `serve`: Run the price relay
//! - `dashboard`: Poll the relay and render price cards
//! - `chat`: Interactive advisor chat over live prices
//! - `ask`: One-shot advisor question
//! - `config`: Show configuration

mod ask;
mod chat;
mod dashboard;
mod serve;

pub use ask::AskArgs;
pub use chat::ChatArgs;
pub use dashboard::DashboardArgs;
pub use serve::ServeArgs;

use crate::advisor::{DrawSampler, Responder};
use crate::config::Config;
use crate::dashboard::{Poller, RelayClient};
use crate::stats::build_source;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crypto-karo")]
#[command(about = "Live INR crypto prices, a price relay and a keyword advisor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the price relay
    Serve(ServeArgs),
    /// Poll the relay and render price cards
    Dashboard(DashboardArgs),
    /// Chat with the advisor over live prices
    Chat(ChatArgs),
    /// Ask the advisor a single question
    Ask(AskArgs),
    /// Show configuration
    Config,
}

/// Poller against the build-time relay
fn poller(config: &Config) -> anyhow::Result<Poller> {
    let stats = build_source(&config.stats, &config.upstream)?;
    Ok(Poller::new(
        RelayClient::new(),
        stats,
        config.dashboard.poll_interval(),
    ))
}

fn responder(config: &Config) -> Responder {
    Responder::new(DrawSampler::new(&config.advisor))
}
