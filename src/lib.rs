pub mod checker;
pub mod config;
pub mod provider;
pub mod script;

pub use checker::attributes::CharAttributes;
pub use checker::segmenter::{UnicodeWordSegmenter, WordSegmenter, WordToken};
pub use checker::{BatchOutcome, CheckVerdict, SpellCheckService, SpellChecker};
pub use config::LanguageConfig;
pub use provider::{ProviderError, SpellingProvider};

use serde::{Deserialize, Serialize};

/// A word's location within the text it was extracted from.
///
/// Offsets and lengths are counted in Unicode code points, not bytes, so
/// they can be handed back to a host surface that indexes text the same
/// way regardless of its internal encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub start: usize,
    pub length: usize,
}

/// A single misspelling reported by the provider's batch check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisspellingSpan {
    pub location: usize,
    pub length: usize,
}
