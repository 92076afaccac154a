use crate::config::LanguageConfig;
use unicode_script::{Script, UnicodeScript};

/// Locale-keyed classification of which characters participate in words.
///
/// Built once from the checker's language configuration and shared by
/// both segmenter instances.
#[derive(Debug, Clone)]
pub struct CharAttributes {
    language: String,
}

impl CharAttributes {
    pub fn new(config: &LanguageConfig) -> Self {
        Self {
            language: config.language.clone(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether `c` can form part of a word.
    ///
    /// Combining marks (script Inherited) attach to the letter before
    /// them, so decomposed accents stay inside the word they modify
    /// instead of splitting it.
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphabetic() || c.script() == Script::Inherited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        let attrs = CharAttributes::new(&LanguageConfig::default());
        assert!(attrs.is_word_char('a'));
        assert!(attrs.is_word_char('ü'));
        assert!(attrs.is_word_char('\u{0301}')); // combining acute accent
        assert!(!attrs.is_word_char('\''));
        assert!(!attrs.is_word_char(':'));
        assert!(!attrs.is_word_char('7'));
        assert!(!attrs.is_word_char(' '));
    }

    #[test]
    fn test_language_passthrough() {
        let attrs = CharAttributes::new(&LanguageConfig::new("fr-FR"));
        assert_eq!(attrs.language(), "fr-FR");
    }
}
