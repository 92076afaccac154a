use crate::checker::attributes::CharAttributes;
use crate::checker::segmenter::{LazySegmenter, WordSegmenter};
use crate::provider::SpellingProvider;
use tracing::debug;

/// Decides whether a token the provider rejected is really a
/// concatenation of independently valid words (e.g. "in'n'out" or
/// "hello:hello").
///
/// The token is decomposed with a dedicated segmenter in decomposition
/// mode and every component is checked against the provider directly,
/// so this never recurses through the top-level segmentation. Returns
/// `false` as soon as one component fails; `true` if all pass, if the
/// segmenter cannot be initialized, or if the provider faults on a
/// component (fail-open).
pub(crate) fn is_valid_contraction<P, S>(
    slot: &mut LazySegmenter<S>,
    attributes: &CharAttributes,
    provider: &P,
    word: &str,
) -> bool
where
    P: SpellingProvider,
    S: WordSegmenter,
{
    let Some(segmenter) = slot.acquire(attributes, false) else {
        debug!(word, "contraction segmenter unavailable, accepting word");
        return true;
    };

    segmenter.set_text(word);
    while let Some(component) = segmenter.next_word() {
        match provider.check_word(&component.text) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => {
                debug!(
                    component = %component.text,
                    error = %err,
                    "provider fault on contraction component, treating as correct"
                );
            }
        }
    }
    true
}
