//! Map-backed content provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use versebot_core::{Passage, PassageQuery};
use versebot_error::{ProviderError, ProviderErrorKind, VerseBotResult};
use versebot_interface::ContentProvider;

/// One passage in a passages file.
///
/// ```json
/// {
///   "book": "John",
///   "chapter": "3",
///   "verses": "16",
///   "translation": "ESV",
///   "text": "For God so loved the world...",
///   "verse_title": "John 3:16",
///   "translation_title": "English Standard Version"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PassageRecord {
    /// Book display name, matched case-insensitively
    book: String,
    /// Chapter digits
    chapter: String,
    /// Verse number or range; `"0"` for the whole chapter
    #[serde(default = "whole_unit")]
    verses: String,
    /// Translation code
    translation: String,
    /// Passage text
    text: String,
    /// Passage heading
    verse_title: String,
    /// Translation name
    translation_title: String,
}

fn whole_unit() -> String {
    versebot_core::WHOLE_UNIT.to_string()
}

type PassageKey = (String, String, String, String);

fn key(book: &str, chapter: &str, verses: &str, translation: &str) -> PassageKey {
    (
        book.to_lowercase(),
        chapter.to_string(),
        verses.to_string(),
        translation.to_uppercase(),
    )
}

/// Content provider serving passages from memory.
///
/// Used by tests and the command-line tool. Queries with no stored passage
/// fail with [`ProviderErrorKind::NotFound`].
///
/// # Examples
///
/// ```
/// use versebot_core::Passage;
/// use versebot_engine::InMemoryContentProvider;
///
/// let mut provider = InMemoryContentProvider::new();
/// provider.insert(
///     "John", "3", "16", "ESV",
///     Passage::new("For God so loved the world...", "John 3:16", "English Standard Version"),
/// );
/// assert_eq!(provider.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentProvider {
    passages: HashMap<PassageKey, Passage>,
}

impl InMemoryContentProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from passage records.
    pub fn from_records(records: impl IntoIterator<Item = PassageRecord>) -> Self {
        let mut provider = Self::new();
        for record in records {
            let PassageRecord {
                book,
                chapter,
                verses,
                translation,
                text,
                verse_title,
                translation_title,
            } = record;
            provider.insert(
                &book,
                &chapter,
                &verses,
                &translation,
                Passage::new(text, verse_title, translation_title),
            );
        }
        provider
    }

    /// Parse a JSON array of [`PassageRecord`]s.
    ///
    /// # Errors
    ///
    /// Returns a provider error if the JSON does not describe passages.
    pub fn from_json(json: &str) -> VerseBotResult<Self> {
        let records: Vec<PassageRecord> = serde_json::from_str(json).map_err(|e| {
            ProviderError::new(ProviderErrorKind::Malformed(format!(
                "Invalid passages JSON: {}",
                e
            )))
        })?;
        Ok(Self::from_records(records))
    }

    /// Store a passage.
    pub fn insert(
        &mut self,
        book: &str,
        chapter: &str,
        verses: &str,
        translation: &str,
        passage: Passage,
    ) {
        self.passages
            .insert(key(book, chapter, verses, translation), passage);
    }

    /// Number of stored passages.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// True when no passages are stored.
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

#[async_trait]
impl ContentProvider for InMemoryContentProvider {
    async fn fetch(&self, query: &PassageQuery) -> VerseBotResult<Passage> {
        let lookup = key(
            query.book_name(),
            query.chapter(),
            query.verses(),
            query.translation(),
        );
        match self.passages.get(&lookup) {
            Some(passage) => Ok(passage.clone()),
            None => {
                debug!(?lookup, "No stored passage");
                Err(ProviderError::new(ProviderErrorKind::NotFound(format!(
                    "{} {}:{} ({})",
                    query.book_name(),
                    query.chapter(),
                    query.verses(),
                    query.translation()
                )))
                .into())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
