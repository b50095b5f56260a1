//! Per-message verse collection.

use crate::ResolvedVerse;
use serde::{Deserialize, Serialize};
use versebot_error::{RequestError, RequestErrorKind, VerseBotResult};

/// The verses resolved from one inbound message.
///
/// Each request owns its own sequence; nothing is shared between requests.
/// A request with no verses is invalid and every read that would produce
/// reply content fails with [`RequestErrorKind::NoVerses`].
///
/// # Examples
///
/// ```
/// use versebot_core::VerseRequest;
///
/// let request = VerseRequest::new();
/// assert!(request.is_invalid());
/// assert!(request.ensure_valid().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerseRequest {
    verses: Vec<ResolvedVerse>,
}

impl VerseRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved verse, keeping citation order.
    pub fn push(&mut self, verse: ResolvedVerse) {
        tracing::trace!(book = %verse.book(), chapter = %verse.chapter(), "Appending resolved verse");
        self.verses.push(verse);
    }

    /// Resolved verses in citation order.
    pub fn verses(&self) -> &[ResolvedVerse] {
        &self.verses
    }

    /// Number of resolved verses.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// True when no verses are held.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// True when the resolution pass produced no verses.
    pub fn is_invalid(&self) -> bool {
        self.is_empty()
    }

    /// Fail with [`RequestErrorKind::NoVerses`] if the request is invalid.
    #[track_caller]
    pub fn ensure_valid(&self) -> VerseBotResult<()> {
        if self.is_invalid() {
            return Err(RequestError::new(RequestErrorKind::NoVerses).into());
        }
        Ok(())
    }

    /// Drop every verse so the request can be reused.
    pub fn clear(&mut self) {
        tracing::debug!(cleared = self.verses.len(), "Clearing verse request");
        self.verses.clear();
    }
}
