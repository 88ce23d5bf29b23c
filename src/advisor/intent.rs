//! Chat intent classification
//!
//! Plain lower-case substring matching against a fixed pattern table. Flags
//! are independent; [`Classification::primary`] applies the precedence.

use crate::market::Symbol;
use serde::Serialize;

/// What the user is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Advice,
    Price,
    Info,
    Prediction,
    Comparison,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Advice => "advice",
            Intent::Price => "price",
            Intent::Info => "info",
            Intent::Prediction => "prediction",
            Intent::Comparison => "comparison",
        }
    }
}

/// One row of the pattern table
#[derive(Debug)]
pub struct IntentPattern {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentPattern {
    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Pattern table in response precedence order
pub const INTENT_PATTERNS: [IntentPattern; 5] = [
    IntentPattern {
        intent: Intent::Advice,
        keywords: &[
            "buy",
            "sell",
            "invest",
            "should i",
            "hold",
            "recommend",
            "advice",
            "advise",
            "good time",
        ],
    },
    IntentPattern {
        intent: Intent::Price,
        keywords: &["price", "cost", "worth", "value", "how much", "rate", "trading at"],
    },
    IntentPattern {
        intent: Intent::Info,
        keywords: &[
            "what is",
            "what's",
            "tell me",
            "about",
            "explain",
            "info",
            "details",
        ],
    },
    IntentPattern {
        intent: Intent::Prediction,
        keywords: &[
            "predict",
            "forecast",
            "future",
            "will ",
            "going to",
            "outlook",
            "trend",
            "tomorrow",
            "next week",
        ],
    },
    IntentPattern {
        intent: Intent::Comparison,
        keywords: &["compare", " vs", "versus", "better", "difference", "which one"],
    },
];

/// Result of classifying one chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Intents whose keywords matched, in precedence order
    pub intents: Vec<Intent>,
    /// Supported currencies mentioned, in [`Symbol::ALL`] order
    pub mentioned: Vec<Symbol>,
}

impl Classification {
    pub fn has(&self, intent: Intent) -> bool {
        self.intents.contains(&intent)
    }

    /// Highest-precedence intent, if any matched
    pub fn primary(&self) -> Option<Intent> {
        self.intents.first().copied()
    }

    /// The first two mentioned currencies, when there are at least two
    pub fn comparison_pair(&self) -> Option<(Symbol, Symbol)> {
        match self.mentioned.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Classify a free-text message
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let intents = INTENT_PATTERNS
        .iter()
        .filter(|p| p.matches(&lower))
        .map(|p| p.intent)
        .collect();

    Classification {
        intents,
        mentioned: mentioned_symbols(&lower),
    }
}

/// Currencies referenced by id, display name or ticker
///
/// Ids and names match as substrings. Tickers are three or four letters and
/// would hit inside ordinary words ("eth" in "something"), so they must
/// appear as a whole word.
pub fn mentioned_symbols(lower: &str) -> Vec<Symbol> {
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    Symbol::ALL
        .into_iter()
        .filter(|s| {
            lower.contains(s.id())
                || lower.contains(&s.display_name().to_lowercase())
                || words.contains(&s.ticker().to_lowercase().as_str())
        })
        .collect()
}
