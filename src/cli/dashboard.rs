//! Dashboard command implementation

use crate::config::Config;
use crate::dashboard::{reduce, render_dashboard, DashboardState};
use clap::Args;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Fetch and render once, then exit
    #[arg(long)]
    pub once: bool,
}

impl DashboardArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut poller = super::poller(config)?;
        let mut state = DashboardState::initial();

        if self.once {
            for event in poller.poll_once().await {
                state = reduce(&state, event);
            }
            println!("{}", render_dashboard(&state));
            return Ok(());
        }

        println!("{}", render_dashboard(&state));
        let mut events = poller.spawn();
        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    state = reduce(&state, event);
                    // Clear screen and home the cursor
                    print!("\x1b[2J\x1b[H");
                    println!("{}", render_dashboard(&state));
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Dashboard stopped");
                    break;
                }
            }
        }
        Ok(())
    }
}
