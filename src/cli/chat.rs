//! Chat command implementation

use crate::config::Config;
use crate::dashboard::{render_event_notice, render_message, ChatSession};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Args, Debug)]
pub struct ChatArgs {}

impl ChatArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut events = super::poller(config)?.spawn();
        let mut session = ChatSession::new(super::responder(config), config.dashboard.typing_delay());

        for message in &session.state().messages {
            println!("{}", render_message(message));
        }
        println!("(type 'quit' to leave)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                Some(event) = events.recv() => {
                    if let Some(notice) = render_event_notice(&event) {
                        println!("{}", notice);
                    }
                    session.apply(event);
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    let text = line.trim();
                    if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
                        break;
                    }
                    if text.is_empty() {
                        continue;
                    }
                    println!("Bot is typing...");
                    if session.send(text).await.is_some() {
                        if let Some(reply) = session.state().messages.last() {
                            println!("{}", render_message(reply));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
