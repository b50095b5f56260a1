//! Indexed reference table built from configuration.

use crate::{BookConfig, VerseBotConfig};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};
use versebot_core::BookId;
use versebot_error::{LookupError, LookupErrorKind, VerseBotResult};
use versebot_interface::{BookLookup, TranslationDefaults};

/// Book and translation lookups over a [`VerseBotConfig`].
///
/// Book names and aliases are matched as prefixes of the lower-cased
/// citation token, longest first, so "1 john 3:16" finds "1 John" before
/// "John". A prefix only counts when it is followed by a non-letter or
/// the end of the token.
///
/// # Example
///
/// ```
/// use versebot_config::{ReferenceTable, VerseBotConfig};
/// use versebot_interface::{BookLookup, TranslationDefaults};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = ReferenceTable::new(&VerseBotConfig::bundled()?);
///
/// let id = table.book_id("1 john 3:16").unwrap();
/// assert_eq!(table.book_name(id)?, "1 John");
/// assert_eq!(table.default_translation(Some("judaism"), id), "NJPS");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    /// (lower-cased name, id), longest name first
    names: Vec<(String, BookId)>,
    books: HashMap<BookId, BookConfig>,
    tanakh_by_name: HashMap<String, String>,
    supported: Vec<String>,
    global_default: String,
    community_defaults: HashMap<String, String>,
}

impl ReferenceTable {
    /// Index the books and translations of a configuration.
    #[instrument(skip(config), fields(books = config.books.len()))]
    pub fn new(config: &VerseBotConfig) -> Self {
        let mut names = Vec::new();
        let mut books = HashMap::new();
        let mut tanakh_by_name = HashMap::new();

        for book in &config.books {
            let id = BookId(book.id);
            names.push((normalize(&book.name), id));
            for alias in &book.aliases {
                names.push((normalize(alias), id));
            }
            if let Some(tanakh) = &book.tanakh {
                tanakh_by_name.insert(book.name.clone(), tanakh.clone());
            }
            books.insert(id, book.clone());
        }

        // Longest names first; ties broken alphabetically so lookups are stable.
        names.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup_by(|a, b| a.0 == b.0);

        let community_defaults = config
            .communities
            .iter()
            .map(|(name, community)| (name.to_lowercase(), community.default.clone()))
            .collect();

        debug!(names = names.len(), "Indexed reference table");

        Self {
            names,
            books,
            tanakh_by_name,
            supported: config.translations.supported.clone(),
            global_default: config.translations.default.clone(),
            community_defaults,
        }
    }

    /// Book-specific default translation, if the book has one.
    pub fn book_translation(&self, id: BookId) -> Option<&str> {
        self.books.get(&id)?.translation.as_deref()
    }

    /// Default translation configured for a community, if any.
    pub fn community_translation(&self, community: &str) -> Option<&str> {
        self.community_defaults
            .get(&community.to_lowercase())
            .map(String::as_str)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl BookLookup for ReferenceTable {
    fn book_id(&self, token: &str) -> Option<BookId> {
        let token = token.trim();
        let found = self.names.iter().find(|(name, _)| {
            token.starts_with(name.as_str())
                && token[name.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphabetic())
        });
        trace!(token, found = ?found.map(|(_, id)| *id), "Book lookup");
        found.map(|(_, id)| *id)
    }

    fn book_name(&self, id: BookId) -> VerseBotResult<&str> {
        self.books
            .get(&id)
            .map(|book| book.name.as_str())
            .ok_or_else(|| LookupError::new(LookupErrorKind::UnknownBookId(id.0)).into())
    }

    fn tanakh_name(&self, book_name: &str) -> VerseBotResult<&str> {
        self.tanakh_by_name
            .get(book_name)
            .map(String::as_str)
            .ok_or_else(|| {
                LookupError::new(LookupErrorKind::MissingTanakhName(book_name.to_string())).into()
            })
    }
}

impl TranslationDefaults for ReferenceTable {
    fn supported_translations(&self) -> &[String] {
        &self.supported
    }

    fn default_translation(&self, community: Option<&str>, book: BookId) -> &str {
        self.book_translation(book)
            .or_else(|| community.and_then(|c| self.community_translation(c)))
            .unwrap_or(self.global_default.as_str())
    }
}
