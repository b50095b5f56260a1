//! Content provider query and result types.

use crate::{BookId, Reference};
use serde::{Deserialize, Serialize};

/// Everything a content provider needs to fetch one passage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct PassageQuery {
    /// Display name of the book (e.g. "1 John")
    book_name: String,
    /// Book identifier
    book_id: BookId,
    /// Chapter and verse selection
    reference: Reference,
    /// Translation code (e.g. "ESV")
    translation: String,
}

impl PassageQuery {
    /// Create a passage query.
    pub fn new(
        book_name: impl Into<String>,
        book_id: BookId,
        reference: Reference,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            book_name: book_name.into(),
            book_id,
            reference,
            translation: translation.into(),
        }
    }

    /// Chapter digits, or `"0"`.
    pub fn chapter(&self) -> &str {
        self.reference.chapter()
    }

    /// Verse number or range, or `"0"`.
    pub fn verses(&self) -> &str {
        self.reference.verses()
    }
}

/// Passage text returned by a content provider.
///
/// # Examples
///
/// ```
/// use versebot_core::Passage;
///
/// let passage = Passage::new(
///     "For God so loved the world...",
///     "John 3:16",
///     "English Standard Version",
/// );
/// assert_eq!(passage.verse_title(), "John 3:16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Passage {
    /// The verse text
    pub(crate) text: String,
    /// Heading for the passage (e.g. "John 3:16")
    pub(crate) verse_title: String,
    /// Full translation name (e.g. "English Standard Version")
    pub(crate) translation_title: String,
}

impl Passage {
    /// Create a passage.
    pub fn new(
        text: impl Into<String>,
        verse_title: impl Into<String>,
        translation_title: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            verse_title: verse_title.into(),
            translation_title: translation_title.into(),
        }
    }
}
