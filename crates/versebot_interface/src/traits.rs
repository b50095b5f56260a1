//! Collaborator traits.

use async_trait::async_trait;
use versebot_core::{BookId, Passage, PassageQuery};
use versebot_error::VerseBotResult;

/// Book reference table.
pub trait BookLookup: Send + Sync {
    /// Find the book a lower-cased citation token names.
    ///
    /// Returns `None` when the token names no known book; that is a
    /// non-match, not an error.
    fn book_id(&self, token: &str) -> Option<BookId>;

    /// Display name for a book id (e.g. "1 John").
    ///
    /// # Errors
    ///
    /// Returns a lookup error if the id is not in the table.
    fn book_name(&self, id: BookId) -> VerseBotResult<&str>;

    /// Tanakh alias for a book display name, used in Tanakh context links.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if the book has no Tanakh alias.
    fn tanakh_name(&self, book_name: &str) -> VerseBotResult<&str>;
}

/// Translation reference table.
pub trait TranslationDefaults: Send + Sync {
    /// Supported translation codes. Order matters: when a citation names
    /// several, the earliest in this list wins.
    fn supported_translations(&self) -> &[String];

    /// Translation to use when a citation names none.
    ///
    /// A book-specific default takes precedence over the community default,
    /// which takes precedence over the global default. Always returns a code.
    fn default_translation(&self, community: Option<&str>, book: BookId) -> &str;
}

/// Source of passage text.
///
/// Implementations make one bounded call per query and report failure with
/// an error; they do not retry. Hosts that want retries or caching wrap a
/// provider in another provider.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the passage a query selects.
    ///
    /// # Errors
    ///
    /// Returns a provider error if the passage cannot be fetched.
    async fn fetch(&self, query: &PassageQuery) -> VerseBotResult<Passage>;

    /// Provider name (e.g. "biblegateway", "memory").
    fn provider_name(&self) -> &str;
}

/// The inbound comment or private message being answered.
pub trait HostMessage {
    /// Author name.
    fn author(&self) -> String;

    /// Permalink to the message. Private messages have none.
    fn permalink(&self) -> Option<&str>;
}
