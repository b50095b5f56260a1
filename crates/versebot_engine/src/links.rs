//! Context link construction.

use tracing::warn;
use versebot_config::LinkConfig;
use versebot_interface::BookLookup;

/// Builds the links attached to verse titles and overflow lines.
///
/// The Tanakh translation links to a chapter page named by the book's Tanakh
/// alias. Every other translation links to a passage search whose query is
/// the book, chapter and optional verses, with spaces percent-encoded.
pub struct LinkBuilder<'a> {
    config: &'a LinkConfig,
    books: &'a dyn BookLookup,
}

impl<'a> LinkBuilder<'a> {
    /// Create a link builder.
    pub fn new(config: &'a LinkConfig, books: &'a dyn BookLookup) -> Self {
        Self { config, books }
    }

    /// Chapter-level link shown on a verse title.
    pub fn context_link(&self, book: &str, chapter: &str, translation: &str) -> String {
        self.tanakh_link(book, chapter, translation)
            .unwrap_or_else(|| self.gateway_link(&format!("{} {}", book, chapter), translation))
    }

    /// Link for a link-only reply line; includes the verse range unless it
    /// is `"0"`. Tanakh links stay chapter-level.
    pub fn overflow_link(&self, book: &str, chapter: &str, verses: &str, translation: &str) -> String {
        if let Some(link) = self.tanakh_link(book, chapter, translation) {
            return link;
        }
        let search = if verses == versebot_core::WHOLE_UNIT {
            format!("{} {}", book, chapter)
        } else {
            format!("{} {}:{}", book, chapter, verses)
        };
        self.gateway_link(&search, translation)
    }

    fn tanakh_link(&self, book: &str, chapter: &str, translation: &str) -> Option<String> {
        if translation != self.config.tanakh_translation {
            return None;
        }
        match self.books.tanakh_name(book) {
            Ok(alias) => Some(format!("{}{}-{}", self.config.tanakh_url, alias, chapter)),
            Err(e) => {
                warn!(book, error = %e, "No Tanakh alias, using passage search link");
                None
            }
        }
    }

    fn gateway_link(&self, search: &str, translation: &str) -> String {
        format!(
            "{}?search={}&version={}",
            self.config.gateway_url, search, translation
        )
        .replace(' ', "%20")
    }
}
