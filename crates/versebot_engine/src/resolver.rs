//! Citation resolution pipeline.

use crate::{TranslationSelector, community_from_permalink, parse_reference};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use versebot_core::{
    BookId, Citation, Origin, PassageQuery, RequestContext, ResolvedVerse, VerseRequest,
};
use versebot_error::{RequestError, RequestErrorKind, VerseBotResult};
use versebot_interface::{BookLookup, ContentProvider, HostMessage, TranslationDefaults};

/// Resolves citation tokens into verses.
///
/// For each token, in order: find the book, parse the chapter and verse
/// range, select the translation and fetch the passage. A token naming no
/// book, or whose fetch fails, is dropped and the rest carry on. Fetches run
/// one after another, in citation order.
pub struct Resolver {
    books: Arc<dyn BookLookup>,
    translations: Arc<dyn TranslationDefaults>,
    selector: TranslationSelector,
    provider: Arc<dyn ContentProvider>,
}

impl Resolver {
    /// Create a resolver over the given collaborators.
    pub fn new(
        books: Arc<dyn BookLookup>,
        translations: Arc<dyn TranslationDefaults>,
        provider: Arc<dyn ContentProvider>,
    ) -> Self {
        let selector = TranslationSelector::from_defaults(translations.as_ref());
        Self {
            books,
            translations,
            selector,
            provider,
        }
    }

    /// Book lookup used by this resolver.
    pub fn books(&self) -> &dyn BookLookup {
        self.books.as_ref()
    }

    /// Match a raw token to a book and parse its chapter and verses.
    ///
    /// Returns `None` when the token names no known book.
    pub fn citation(&self, token: &str) -> Option<Citation> {
        let lowered = token.to_lowercase();
        let book_id = self.books.book_id(&lowered)?;
        Some(Citation::new(token, book_id, parse_reference(&lowered)))
    }

    /// Translation for a raw token posted in a community.
    pub fn translation(&self, token: &str, community: Option<&str>, book: BookId) -> String {
        self.selector.select(
            &token.to_uppercase(),
            community,
            book,
            self.translations.as_ref(),
        )
    }

    /// Where a message came from.
    ///
    /// The community comes from the message permalink, else the context.
    /// The recorded permalink is the context override, else the message's own.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::InvalidContext`] if neither the message nor
    /// the context supplies a permalink.
    pub fn origin<M: HostMessage + ?Sized>(
        &self,
        message: &M,
        context: &RequestContext,
    ) -> VerseBotResult<Origin> {
        let community = message
            .permalink()
            .and_then(community_from_permalink)
            .or_else(|| context.community().as_deref().map(str::to_lowercase));

        let permalink = context
            .permalink()
            .clone()
            .or_else(|| message.permalink().map(str::to_string))
            .ok_or_else(|| {
                RequestError::new(RequestErrorKind::InvalidContext(
                    "message has no permalink and none was supplied".to_string(),
                ))
            })?;

        Ok(Origin::new(community, message.author(), permalink))
    }

    /// Resolve tokens into a new request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::NoVerses`] if no token resolves, and
    /// [`RequestErrorKind::InvalidContext`] if a citation matches a book but no
    /// permalink is available.
    pub async fn resolve<M, I, S>(
        &self,
        tokens: I,
        message: &M,
        context: &RequestContext,
    ) -> VerseBotResult<VerseRequest>
    where
        M: HostMessage + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut request = VerseRequest::new();
        self.resolve_into(&mut request, tokens, message, context)
            .await?;
        Ok(request)
    }

    /// Resolve tokens, appending verses to an existing request.
    ///
    /// Returns the number of verses appended. The origin is only worked out
    /// once a token names a known book, so a message without citations fails
    /// with `NoVerses` whether or not it has a permalink.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::NoVerses`] if the request is still empty
    /// afterwards, and [`RequestErrorKind::InvalidContext`] if a citation
    /// matches a book but no permalink is available.
    #[instrument(
        skip(self, request, tokens, message, context),
        fields(provider = self.provider.provider_name())
    )]
    pub async fn resolve_into<M, I, S>(
        &self,
        request: &mut VerseRequest,
        tokens: I,
        message: &M,
        context: &RequestContext,
    ) -> VerseBotResult<usize>
    where
        M: HostMessage + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = request.len();
        let mut origin: Option<Origin> = None;
        let mut seen = 0usize;

        for token in tokens {
            seen += 1;
            let token = token.as_ref();
            let Some(citation) = self.citation(token) else {
                debug!(token, "No book matches citation, dropping");
                continue;
            };

            if origin.is_none() {
                origin = Some(self.origin(message, context)?);
            }
            let Some(origin) = origin.as_ref() else {
                continue;
            };

            if let Some(verse) = self.resolve_citation(token, citation, origin).await {
                request.push(verse);
            }
        }

        let appended = request.len() - before;
        info!(
            tokens = seen,
            resolved = appended,
            community = origin.as_ref().and_then(|o| o.community().as_deref()),
            "Resolved citations"
        );

        request.ensure_valid()?;
        Ok(appended)
    }

    async fn resolve_citation(
        &self,
        token: &str,
        citation: Citation,
        origin: &Origin,
    ) -> Option<ResolvedVerse> {
        let book_name = match self.books.book_name(*citation.book_id()) {
            Ok(name) => name.to_string(),
            Err(e) => {
                debug!(token, error = %e, "Book id has no display name, dropping");
                return None;
            }
        };

        let translation = self.translation(
            token,
            origin.community().as_deref(),
            *citation.book_id(),
        );
        let query = PassageQuery::new(
            book_name,
            *citation.book_id(),
            citation.reference().clone(),
            translation,
        );

        match self.provider.fetch(&query).await {
            Ok(passage) => Some(ResolvedVerse::new(query, passage, origin.clone())),
            Err(e) => {
                debug!(token, error = %e, "Passage fetch failed, dropping");
                None
            }
        }
    }
}
