//! Market data types
//!
//! The fixed set of supported currencies and the INR spot quotes the relay
//! hands out for them.

mod error;
mod format;
mod quote;
mod symbol;

pub use error::MarketError;
pub use format::{format_billions, format_inr, format_millions};
pub use quote::{PriceQuote, PriceSnapshot};
pub use symbol::{logo_url, Symbol, TARGET_CURRENCY};
