//! Crypto advisor chat
//!
//! Keyword intent classification, a threshold-rule recommendation engine and
//! canned reply templates. None of this is a forecasting model.

mod intent;
mod message;
mod recommendation;
mod responder;

pub use intent::{classify, mentioned_symbols, Classification, Intent, IntentPattern, INTENT_PATTERNS};
pub use message::{ChatMessage, Role, GREETING};
pub use recommendation::{advise, evaluate, Advice, DrawSampler, MarketDraw, Recommendation};
pub use responder::{fallback_message, MarketView, Reply, ReplyKind, Responder};
