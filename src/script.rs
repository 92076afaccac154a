use unicode_script::{Script, UnicodeScript};

/// Returns whether the text contains at least one character worth
/// spell-checking.
///
/// Characters in the Common and Inherited script categories (punctuation,
/// digits, spaces, combining marks) carry no word-forming semantics of
/// their own, so text made of nothing else can be rejected before asking
/// the provider anything. Scans from the start and stops at the first
/// hit. This is purely a cheap rejection filter: a `true` here does not
/// imply any word in the text is actually checkable.
pub fn has_checkable_characters(text: &str) -> bool {
    text.chars()
        .any(|c| !matches!(c.script(), Script::Common | Script::Inherited))
}
