use crate::MisspellingSpan;
use thiserror::Error;

/// Faults a provider call can surface.
///
/// None of these ever reach the host: the checker converts every variant
/// into a fail-open outcome (word treated as correct, batch cancelled)
/// and leaves a `tracing` event as the only trace.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider exists but cannot currently be called
    #[error("provider is unavailable")]
    Unavailable,

    /// The provider does not implement this entry point
    #[error("provider does not implement {0}")]
    Unsupported(&'static str),

    /// The call itself failed (transport fault, provider panic, ...)
    #[error("provider call failed: {0}")]
    CallFailed(String),

    /// The provider answered with something other than the expected shape
    #[error("provider returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// The external checking oracle a checker delegates every dictionary
/// lookup to.
///
/// Implementations may sit in-process, behind an RPC boundary, or inside
/// a scripting engine; word payloads are whole Unicode strings either
/// way. Only `check_word` is mandatory. The other two entry points
/// default to [`ProviderError::Unsupported`], which the checker treats
/// the same as a provider that simply lacks the method: the batch path
/// cancels and auto-correct yields nothing.
pub trait SpellingProvider {
    /// Is `word` spelled correctly?
    fn check_word(&self, word: &str) -> Result<bool, ProviderError>;

    /// Check a whole text at once and return every misspelling span, in
    /// input order. The provider performs its own segmentation here.
    fn request_batch_check(&self, _text: &str) -> Result<Vec<MisspellingSpan>, ProviderError> {
        Err(ProviderError::Unsupported("request_batch_check"))
    }

    /// Suggest a correction for a misspelled word, if the provider has
    /// one. `Ok(None)` means "no correction", not a fault.
    fn auto_correct(&self, _word: &str) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::Unsupported("auto_correct"))
    }
}
