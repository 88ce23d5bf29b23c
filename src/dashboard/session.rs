//! Chat session
//!
//! Owns the view-model and drives the send → typing → reply cycle.

use super::{reduce, DashboardState, Event};
use crate::advisor::{Reply, Responder};
use std::time::Duration;

/// One interactive chat over the shared dashboard state
pub struct ChatSession {
    responder: Responder,
    typing_delay: Duration,
    state: DashboardState,
}

impl ChatSession {
    pub fn new(responder: Responder, typing_delay: Duration) -> Self {
        Self {
            responder,
            typing_delay,
            state: DashboardState::initial(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Fold an event (usually from the poller) into the state
    pub fn apply(&mut self, event: Event) {
        self.state = reduce(&self.state, event);
    }

    /// Submit a user message and wait for the bot reply
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<Reply> {
        if text.trim().is_empty() {
            return None;
        }

        self.apply(Event::MessageSent(text.to_string()));
        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let reply = self.responder.respond(text, self.state.market());
        self.apply(Event::ReplyReady(reply.text.clone()));
        Some(reply)
    }
}
