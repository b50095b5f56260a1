//! End-to-end reply pipeline.

use crate::{LinkBuilder, ReplyAssembler, Resolver, extract_citations};
use std::sync::Arc;
use tracing::{debug, instrument};
use versebot_config::{ReferenceTable, VerseBotConfig};
use versebot_core::{RequestContext, VerseRequest};
use versebot_error::VerseBotResult;
use versebot_interface::{ContentProvider, HostMessage};

/// Turns message text into reply text.
///
/// Owns the configuration, the reference table built from it and the
/// content provider. Each call to [`respond`](Self::respond) builds its own
/// [`VerseRequest`], so one engine can serve concurrent messages.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use versebot_config::VerseBotConfig;
/// use versebot_core::{Passage, RequestContext};
/// use versebot_engine::{InMemoryContentProvider, VerseEngine};
/// use versebot_interface::InboundMessageBuilder;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut provider = InMemoryContentProvider::new();
/// provider.insert(
///     "John",
///     "3",
///     "16",
///     "ESV",
///     Passage::new("For God so loved the world...", "John 3:16", "English Standard Version"),
/// );
///
/// let engine = VerseEngine::new(VerseBotConfig::bundled()?, Arc::new(provider));
/// let message = InboundMessageBuilder::default()
///     .author("reader")
///     .body("See [John 3:16]")
///     .permalink("http://www.reddit.com/r/Christianity/comments/abc/x/def")
///     .build()?;
///
/// let reply = engine
///     .respond(message.body(), &message, &RequestContext::default())
///     .await?;
/// assert!(reply.starts_with("[**John 3:16 | English Standard Version**]"));
/// # Ok(())
/// # }
/// ```
pub struct VerseEngine {
    config: VerseBotConfig,
    table: Arc<ReferenceTable>,
    resolver: Resolver,
}

impl VerseEngine {
    /// Create an engine over a configuration and content provider.
    pub fn new(config: VerseBotConfig, provider: Arc<dyn ContentProvider>) -> Self {
        let table = Arc::new(ReferenceTable::new(&config));
        let resolver = Resolver::new(table.clone(), table.clone(), provider);
        Self {
            config,
            table,
            resolver,
        }
    }

    /// Configuration the engine was built from.
    pub fn config(&self) -> &VerseBotConfig {
        &self.config
    }

    /// Book and translation tables.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Citation resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Link builder over the configured link settings.
    pub fn link_builder(&self) -> LinkBuilder<'_> {
        LinkBuilder::new(&self.config.links, self.table.as_ref())
    }

    /// Reply assembler over the configured reply settings.
    pub fn assembler(&self) -> ReplyAssembler<'_> {
        ReplyAssembler::new(&self.config.reply, self.link_builder())
    }

    /// Resolve every citation in `text` into a request.
    ///
    /// # Errors
    ///
    /// Returns `NoVerses` when nothing resolves and `InvalidContext` when no
    /// permalink is available.
    pub async fn request<M: HostMessage + ?Sized>(
        &self,
        text: &str,
        message: &M,
        context: &RequestContext,
    ) -> VerseBotResult<VerseRequest> {
        let tokens = extract_citations(text);
        debug!(citations = tokens.len(), "Extracted citations");
        self.resolver.resolve(tokens, message, context).await
    }

    /// Build the reply for the citations in `text`.
    ///
    /// # Errors
    ///
    /// Returns `NoVerses` when no citation resolves, so the caller can skip
    /// replying, and `InvalidContext` when no permalink is available.
    #[instrument(skip(self, text, message, context), fields(author = %message.author()))]
    pub async fn respond<M: HostMessage + ?Sized>(
        &self,
        text: &str,
        message: &M,
        context: &RequestContext,
    ) -> VerseBotResult<String> {
        let request = self.request(text, message, context).await?;
        self.assembler().assemble(&request)
    }
}
