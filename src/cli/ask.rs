//! Ask command implementation

use crate::config::Config;
use crate::dashboard::ChatSession;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, e.g. "Should I buy Bitcoin?"
    pub question: String,
}

impl AskArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut poller = super::poller(config)?;
        let mut session = ChatSession::new(super::responder(config), Duration::ZERO);

        for event in poller.poll_once().await {
            session.apply(event);
        }
        if let Some(error) = &session.state().error {
            tracing::warn!(%error, "Answering without live prices");
        }

        match session.send(&self.question).await {
            Some(reply) => println!("{}", reply.text),
            None => anyhow::bail!("Question is empty"),
        }
        Ok(())
    }
}
