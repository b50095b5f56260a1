//! Parsed citation types.

use serde::{Deserialize, Serialize};

/// Chapter or verse value meaning "not specified".
///
/// A chapter of `"0"` selects the whole book, a verse range of `"0"` the whole
/// chapter.
pub const WHOLE_UNIT: &str = "0";

/// Numeric identifier of a book in the reference table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display, derive_more::From,
)]
#[display("{}", _0)]
pub struct BookId(pub u32);

/// Chapter and verse selection extracted from a citation token.
///
/// Both parts are kept as the digit strings found in the token; the verse part
/// may be a dash range such as `"16-17"`.
///
/// # Examples
///
/// ```
/// use versebot_core::Reference;
///
/// let reference = Reference::new("3", "16-17");
/// assert_eq!(reference.chapter(), "3");
/// assert!(!reference.is_whole_chapter());
///
/// let whole = Reference::default();
/// assert!(whole.is_whole_book());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    chapter: String,
    verses: String,
}

impl Reference {
    /// Create a reference, substituting [`WHOLE_UNIT`] for empty parts.
    pub fn new(chapter: impl Into<String>, verses: impl Into<String>) -> Self {
        fn or_whole(value: String) -> String {
            if value.is_empty() {
                WHOLE_UNIT.to_string()
            } else {
                value
            }
        }

        Self {
            chapter: or_whole(chapter.into()),
            verses: or_whole(verses.into()),
        }
    }

    /// Chapter digits, or `"0"`.
    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    /// Verse number or range, or `"0"`.
    pub fn verses(&self) -> &str {
        &self.verses
    }

    /// True when no verse selection was given.
    pub fn is_whole_chapter(&self) -> bool {
        self.verses == WHOLE_UNIT
    }

    /// True when no chapter was given.
    pub fn is_whole_book(&self) -> bool {
        self.chapter == WHOLE_UNIT
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::new(WHOLE_UNIT, WHOLE_UNIT)
    }
}

/// A citation token matched to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Citation {
    /// Token as it appeared in the message
    raw: String,
    /// Book the token names
    book_id: BookId,
    /// Chapter and verse selection
    reference: Reference,
}

impl Citation {
    /// Create a citation.
    pub fn new(raw: impl Into<String>, book_id: BookId, reference: Reference) -> Self {
        Self {
            raw: raw.into(),
            book_id,
            reference,
        }
    }
}
