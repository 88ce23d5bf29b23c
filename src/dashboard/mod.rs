//! Dashboard client
//!
//! Polls the relay, keeps an immutable view-model updated through a pure
//! reducer, renders it to the terminal and hosts the advisor chat.

mod client;
mod poller;
mod render;
mod session;
mod state;

pub use client::{relay_base_url, ClientError, RelayClient, DEV_RELAY_URL, PROD_RELAY_URL};
pub use poller::{Poller, MIN_POLL_INTERVAL};
pub use render::{render_card, render_dashboard, render_event_notice, render_message, sparkline};
pub use session::ChatSession;
pub use state::{reduce, DashboardState, Event};
