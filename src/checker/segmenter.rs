use crate::checker::attributes::CharAttributes;
use std::collections::VecDeque;
use unicode_segmentation::UnicodeSegmentation;

/// A word or contraction candidate produced by a segmenter.
///
/// `start` and `length` are in code points, matching the offsets the
/// host surface expects back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub text: String,
    pub start: usize,
    pub length: usize,
}

/// Splits text into checkable word candidates.
///
/// With `allow_contractions` set, a run of words joined by mid-word
/// characters ("hello:hello", "in'n'out") comes back as a single token;
/// without it, the same input decomposes into its word components. The
/// checker drives one instance in each mode.
pub trait WordSegmenter {
    /// Prepare the segmenter for the given attribute table and mode.
    /// Returns `false` if the segmenter cannot be set up; the caller is
    /// expected to never retry.
    fn initialize(&mut self, attributes: &CharAttributes, allow_contractions: bool) -> bool;

    fn set_text(&mut self, text: &str);

    fn next_word(&mut self) -> Option<WordToken>;
}

/// Default segmenter built on UAX #29 word boundaries.
///
/// Unicode word boundaries already keep letters joined across single
/// mid-word characters (colon, apostrophe, period), so top-level
/// segmentation yields contractions as single tokens for free.
/// Decomposition mode re-splits each bounded segment at every character
/// the attribute table rejects.
#[derive(Debug, Default)]
pub struct UnicodeWordSegmenter {
    attributes: Option<CharAttributes>,
    allow_contractions: bool,
    tokens: VecDeque<WordToken>,
}

impl WordSegmenter for UnicodeWordSegmenter {
    fn initialize(&mut self, attributes: &CharAttributes, allow_contractions: bool) -> bool {
        self.attributes = Some(attributes.clone());
        self.allow_contractions = allow_contractions;
        self.tokens.clear();
        true
    }

    fn set_text(&mut self, text: &str) {
        self.tokens.clear();
        let Some(attributes) = self.attributes.clone() else {
            return;
        };

        let mut position = 0;
        for segment in text.split_word_bounds() {
            let char_count = segment.chars().count();
            if self.allow_contractions {
                if segment.chars().any(|c| attributes.is_word_char(c)) {
                    self.tokens.push_back(WordToken {
                        text: segment.to_string(),
                        start: position,
                        length: char_count,
                    });
                }
            } else {
                push_components(&mut self.tokens, &attributes, segment, position);
            }
            position += char_count;
        }
    }

    fn next_word(&mut self) -> Option<WordToken> {
        self.tokens.pop_front()
    }
}

/// Splits one bounded segment at non-word characters, emitting each run
/// of word characters as its own token.
fn push_components(
    out: &mut VecDeque<WordToken>,
    attributes: &CharAttributes,
    segment: &str,
    base: usize,
) {
    let mut current = String::new();
    let mut start = 0;
    let mut offset = 0;

    for c in segment.chars() {
        if attributes.is_word_char(c) {
            if current.is_empty() {
                start = offset;
            }
            current.push(c);
        } else if !current.is_empty() {
            out.push_back(WordToken {
                text: std::mem::take(&mut current),
                start: base + start,
                length: offset - start,
            });
        }
        offset += 1;
    }

    if !current.is_empty() {
        out.push_back(WordToken {
            text: current,
            start: base + start,
            length: offset - start,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Uninitialized,
    Ready,
    Failed,
}

/// A lazily-initialized segmenter slot.
///
/// Initialization is attempted at most once. A failed attempt is
/// memoized for the owner's lifetime: every later acquire returns `None`
/// without retrying, so callers short-circuit to their fail-open path.
#[derive(Debug)]
pub(crate) struct LazySegmenter<S> {
    segmenter: S,
    state: SlotState,
}

impl<S: WordSegmenter> LazySegmenter<S> {
    pub(crate) fn new(segmenter: S) -> Self {
        Self {
            segmenter,
            state: SlotState::Uninitialized,
        }
    }

    pub(crate) fn acquire(
        &mut self,
        attributes: &CharAttributes,
        allow_contractions: bool,
    ) -> Option<&mut S> {
        match self.state {
            SlotState::Failed => None,
            SlotState::Ready => Some(&mut self.segmenter),
            SlotState::Uninitialized => {
                if self.segmenter.initialize(attributes, allow_contractions) {
                    self.state = SlotState::Ready;
                    Some(&mut self.segmenter)
                } else {
                    self.state = SlotState::Failed;
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LanguageConfig;

    fn attrs() -> CharAttributes {
        CharAttributes::new(&LanguageConfig::default())
    }

    fn collect(segmenter: &mut UnicodeWordSegmenter, text: &str) -> Vec<WordToken> {
        segmenter.set_text(text);
        let mut tokens = Vec::new();
        while let Some(token) = segmenter.next_word() {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_plain_words_with_offsets() {
        let mut segmenter = UnicodeWordSegmenter::default();
        assert!(segmenter.initialize(&attrs(), true));

        let tokens = collect(&mut segmenter, "The qick brown fox");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["The", "qick", "brown", "fox"]);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].length, 4);
    }

    #[test]
    fn test_contraction_kept_as_single_token() {
        let mut segmenter = UnicodeWordSegmenter::default();
        assert!(segmenter.initialize(&attrs(), true));

        let tokens = collect(&mut segmenter, "say hello:hello now");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["say", "hello:hello", "now"]);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].length, 11);
    }

    #[test]
    fn test_decomposition_splits_contraction() {
        let mut segmenter = UnicodeWordSegmenter::default();
        assert!(segmenter.initialize(&attrs(), false));

        let tokens = collect(&mut segmenter, "in'n'out");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["in", "n", "out"]);
        assert_eq!(tokens[2].start, 5);
        assert_eq!(tokens[2].length, 3);
    }

    #[test]
    fn test_offsets_are_code_points_not_bytes() {
        let mut segmenter = UnicodeWordSegmenter::default();
        assert!(segmenter.initialize(&attrs(), true));

        // "héllo" is 6 bytes but 5 code points
        let tokens = collect(&mut segmenter, "héllo wörld");
        assert_eq!(tokens[1].text, "wörld");
        assert_eq!(tokens[1].start, 6);
        assert_eq!(tokens[1].length, 5);
    }

    #[test]
    fn test_digits_and_punctuation_skipped() {
        let mut segmenter = UnicodeWordSegmenter::default();
        assert!(segmenter.initialize(&attrs(), true));

        let tokens = collect(&mut segmenter, "42 ... words");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["words"]);
    }

    #[test]
    fn test_lazy_slot_is_fail_sticky() {
        #[derive(Default)]
        struct Broken {
            attempts: usize,
        }

        impl WordSegmenter for Broken {
            fn initialize(&mut self, _: &CharAttributes, _: bool) -> bool {
                self.attempts += 1;
                false
            }
            fn set_text(&mut self, _: &str) {}
            fn next_word(&mut self) -> Option<WordToken> {
                None
            }
        }

        let mut slot = LazySegmenter::new(Broken::default());
        assert!(slot.acquire(&attrs(), true).is_none());
        assert!(slot.acquire(&attrs(), true).is_none());
        assert_eq!(slot.segmenter.attempts, 1);
    }
}
