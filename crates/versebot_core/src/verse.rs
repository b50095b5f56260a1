//! Resolved verse records.

use crate::{Passage, PassageQuery};
use serde::{Deserialize, Serialize};

/// Where a citation came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct Origin {
    /// Community (subreddit) the message was posted in, if known
    community: Option<String>,
    /// Author of the message
    author: String,
    /// Permalink to the message
    permalink: String,
}

impl Origin {
    /// Create an origin record.
    pub fn new(
        community: Option<String>,
        author: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            community,
            author: author.into(),
            permalink: permalink.into(),
        }
    }
}

/// A citation whose text was fetched successfully.
///
/// Immutable once created; a [`VerseRequest`](crate::VerseRequest) owns a
/// sequence of these in citation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ResolvedVerse {
    /// Book display name
    book: String,
    /// Chapter digits, or `"0"`
    chapter: String,
    /// Verse number or range, or `"0"`
    verses: String,
    /// Translation code
    translation: String,
    /// Fetched verse text
    contents: String,
    /// Community the citation came from
    community: Option<String>,
    /// Passage heading supplied by the provider
    verse_title: String,
    /// Translation name supplied by the provider
    translation_title: String,
    /// Author of the citing message
    author: String,
    /// Permalink to the citing message
    permalink: String,
}

impl ResolvedVerse {
    /// Combine a query, its fetched passage and the message origin.
    pub fn new(query: PassageQuery, passage: Passage, origin: Origin) -> Self {
        let Passage {
            text,
            verse_title,
            translation_title,
        } = passage;
        let Origin {
            community,
            author,
            permalink,
        } = origin;

        Self {
            book: query.book_name().clone(),
            chapter: query.chapter().to_string(),
            verses: query.verses().to_string(),
            translation: query.translation().clone(),
            contents: text,
            community,
            verse_title,
            translation_title,
            author,
            permalink,
        }
    }

    /// True when no verse selection was given.
    pub fn is_whole_chapter(&self) -> bool {
        self.verses == crate::WHOLE_UNIT
    }
}
