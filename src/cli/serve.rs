//! Serve command implementation

use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the listen address
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut relay = config.relay.clone();
        if let Some(bind) = &self.bind {
            relay.bind_addr = bind.clone();
        }
        crate::relay::serve(&relay, &config.upstream).await
    }
}
