pub mod attributes;
mod contraction;
pub mod segmenter;

use crate::config::LanguageConfig;
use crate::provider::SpellingProvider;
use crate::script;
use crate::{MisspellingSpan, TextSpan};
use attributes::CharAttributes;
use segmenter::{LazySegmenter, UnicodeWordSegmenter, WordSegmenter, WordToken};
use tokio::sync::oneshot;
use tracing::debug;

/// Outcome of asking the provider about a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckVerdict {
    Correct,
    Misspelled(TextSpan),
    /// The provider could not answer; treated as correct downstream.
    Indeterminate,
}

/// Terminal state of a batch check.
///
/// `Cancelled` means no check was performed at all, which callers must
/// keep distinct from `Finished` with zero spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Cancelled,
    Finished(Vec<MisspellingSpan>),
}

/// The checking surface a host text editor talks to.
///
/// [`SpellChecker`] is the canonical implementation; any adapter that
/// fronts a different transport can implement this instead. The UI
/// hooks default to no-ops because spelling-menu presentation belongs
/// to the host.
pub trait SpellCheckService {
    /// Find the first misspelling in `text`, if any.
    fn check_spelling(&mut self, text: &str) -> Option<TextSpan>;

    /// Check a whole paragraph through the provider's own segmentation.
    fn request_text_check(&mut self, text: &str) -> oneshot::Receiver<BatchOutcome>;

    /// Ask the provider for a correction of a single word.
    fn auto_correct(&mut self, word: &str) -> Option<String>;

    fn show_spelling_ui(&mut self, _show: bool) {}

    fn is_showing_spelling_ui(&self) -> bool {
        false
    }

    fn update_spelling_ui_with_misspelled_word(&mut self, _word: &str) {}
}

/// Orchestrates spell checking against an external provider.
///
/// Owns two segmenter instances: one splitting host text into word and
/// contraction candidates, one decomposing a rejected contraction into
/// its components. Both are initialized lazily on first use and never
/// shared. Every internal fault (segmenter down, provider fault)
/// degrades to the least disruptive outcome (a word judged correct, a
/// batch judged cancelled) so the host's input path is never blocked on
/// a checker fault.
pub struct SpellChecker<P, S = UnicodeWordSegmenter> {
    provider: P,
    attributes: CharAttributes,
    text_segmenter: LazySegmenter<S>,
    contraction_segmenter: LazySegmenter<S>,
}

impl<P: SpellingProvider> SpellChecker<P> {
    pub fn new(config: &LanguageConfig, provider: P) -> Self {
        Self::with_segmenters(
            config,
            provider,
            UnicodeWordSegmenter::default(),
            UnicodeWordSegmenter::default(),
        )
    }
}

impl<P: SpellingProvider, S: WordSegmenter> SpellChecker<P, S> {
    /// Build a checker around custom segmenter instances.
    pub fn with_segmenters(
        config: &LanguageConfig,
        provider: P,
        text_segmenter: S,
        contraction_segmenter: S,
    ) -> Self {
        Self {
            provider,
            attributes: CharAttributes::new(config),
            text_segmenter: LazySegmenter::new(text_segmenter),
            contraction_segmenter: LazySegmenter::new(contraction_segmenter),
        }
    }

    pub fn language(&self) -> &str {
        self.attributes.language()
    }

    /// Find the first misspelling in `text`.
    ///
    /// Candidates are checked in text order; a candidate the provider
    /// rejects gets one more chance as a contraction of valid words
    /// before its span is returned. Scanning stops at the first
    /// confirmed misspelling; no provider calls are made for words
    /// after it. Returns `None` for empty text, when the segmenter is
    /// unavailable, and when every candidate passes.
    pub fn check_spelling(&mut self, text: &str) -> Option<TextSpan> {
        if text.is_empty() {
            return None;
        }

        let tokens = self.segment(text)?;
        for token in tokens {
            match self.classify(&token) {
                CheckVerdict::Correct | CheckVerdict::Indeterminate => continue,
                CheckVerdict::Misspelled(span) => {
                    // A concatenation of valid words ("hello:hello") is
                    // not a misspelling even when the provider rejects
                    // the whole token.
                    if contraction::is_valid_contraction(
                        &mut self.contraction_segmenter,
                        &self.attributes,
                        &self.provider,
                        &token.text,
                    ) {
                        continue;
                    }
                    return Some(span);
                }
            }
        }
        None
    }

    /// Check a whole paragraph at once.
    ///
    /// The text goes to the provider's batch entry point verbatim,
    /// bypassing the internal segmenter; the provider's own
    /// segmentation and span ordering are trusted. Empty text, text
    /// with no checkable-script characters, and any provider failure
    /// resolve to [`BatchOutcome::Cancelled`]. The outcome is sent
    /// before this returns, so the receiver resolves immediately; the
    /// handle shape keeps the host's calling convention asynchronous.
    pub fn request_text_check(&mut self, text: &str) -> oneshot::Receiver<BatchOutcome> {
        let (tx, rx) = oneshot::channel();

        let outcome = if text.is_empty() || !script::has_checkable_characters(text) {
            BatchOutcome::Cancelled
        } else {
            match self.provider.request_batch_check(text) {
                Ok(spans) => BatchOutcome::Finished(spans),
                Err(err) => {
                    debug!(error = %err, "batch check failed, cancelling");
                    BatchOutcome::Cancelled
                }
            }
        };

        let _ = tx.send(outcome);
        rx
    }

    /// Ask the provider for a correction of a single word. Provider
    /// failures and empty corrections both come back as `None`.
    pub fn auto_correct(&mut self, word: &str) -> Option<String> {
        match self.provider.auto_correct(word) {
            Ok(correction) => correction.filter(|c| !c.is_empty()),
            Err(err) => {
                debug!(word, error = %err, "auto-correct unavailable");
                None
            }
        }
    }

    pub fn show_spelling_ui(&mut self, _show: bool) {}

    pub fn is_showing_spelling_ui(&self) -> bool {
        false
    }

    pub fn update_spelling_ui_with_misspelled_word(&mut self, _word: &str) {}

    fn segment(&mut self, text: &str) -> Option<Vec<WordToken>> {
        let Some(segmenter) = self.text_segmenter.acquire(&self.attributes, true) else {
            debug!("word segmenter unavailable, skipping check");
            return None;
        };

        segmenter.set_text(text);
        let mut tokens = Vec::new();
        while let Some(token) = segmenter.next_word() {
            tokens.push(token);
        }
        Some(tokens)
    }

    fn classify(&self, token: &WordToken) -> CheckVerdict {
        match self.provider.check_word(&token.text) {
            Ok(true) => CheckVerdict::Correct,
            Ok(false) => CheckVerdict::Misspelled(TextSpan {
                text: token.text.clone(),
                start: token.start,
                length: token.length,
            }),
            Err(err) => {
                debug!(word = %token.text, error = %err, "provider fault, treating word as correct");
                CheckVerdict::Indeterminate
            }
        }
    }
}

impl<P: SpellingProvider, S: WordSegmenter> SpellCheckService for SpellChecker<P, S> {
    fn check_spelling(&mut self, text: &str) -> Option<TextSpan> {
        SpellChecker::check_spelling(self, text)
    }

    fn request_text_check(&mut self, text: &str) -> oneshot::Receiver<BatchOutcome> {
        SpellChecker::request_text_check(self, text)
    }

    fn auto_correct(&mut self, word: &str) -> Option<String> {
        SpellChecker::auto_correct(self, word)
    }
}
