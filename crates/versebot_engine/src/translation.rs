//! Translation selection.

use regex::Regex;
use tracing::{trace, warn};
use versebot_core::BookId;
use versebot_interface::TranslationDefaults;

/// Picks the translation for a citation.
///
/// A translation code named in the citation as a standalone word wins. When
/// several are named, the one listed first among the supported codes wins,
/// wherever it appears in the text. Otherwise the default for the book and
/// community applies.
///
/// # Examples
///
/// ```
/// use versebot_engine::TranslationSelector;
///
/// let selector = TranslationSelector::new(&["ESV".to_string(), "KJV".to_string()]);
///
/// assert_eq!(selector.explicit("JOHN 3:16 KJV"), Some("KJV"));
/// assert_eq!(selector.explicit("JOHN 3:16 KJV ESV"), Some("ESV"));
/// assert_eq!(selector.explicit("JOHN 3:16 KJVX"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TranslationSelector {
    patterns: Vec<(String, Regex)>,
}

impl TranslationSelector {
    /// Compile word-boundary patterns for the supported codes, keeping order.
    pub fn new(codes: &[String]) -> Self {
        let patterns = codes
            .iter()
            .filter_map(|code| {
                match Regex::new(&format!(r"\b{}\b", regex::escape(code))) {
                    Ok(pattern) => Some((code.clone(), pattern)),
                    Err(e) => {
                        warn!(code, error = %e, "Skipping translation code that does not compile");
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Build a selector over the codes a translation table supports.
    pub fn from_defaults(defaults: &dyn TranslationDefaults) -> Self {
        Self::new(defaults.supported_translations())
    }

    /// Translation explicitly named in upper-cased citation text, if any.
    pub fn explicit(&self, text: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(code, _)| code.as_str())
    }

    /// Translation for a citation: the explicit one, else the default for
    /// the community and book.
    pub fn select(
        &self,
        text: &str,
        community: Option<&str>,
        book: BookId,
        defaults: &dyn TranslationDefaults,
    ) -> String {
        let selected = match self.explicit(text) {
            Some(code) => code,
            None => defaults.default_translation(community, book),
        };
        trace!(text, community, %book, selected, "Selected translation");
        selected.to_string()
    }
}
