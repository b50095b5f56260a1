//! Reply rendering command.

use std::path::Path;
use std::sync::Arc;
use tracing::info;
use versebot::{
    CachedContentProvider, InMemoryContentProvider, InboundMessageBuilder, PassageCacheConfig,
    ProviderError, ProviderErrorKind, RequestContextBuilder, RequestError, RequestErrorKind,
    VerseBotConfig, VerseBotResult, VerseEngine,
};

/// Resolve `text` against a passages file and print the reply.
pub async fn reply_to_text(
    config: VerseBotConfig,
    text: &str,
    passages: &Path,
    community: Option<String>,
    permalink: String,
    author: String,
) -> VerseBotResult<()> {
    let json = std::fs::read_to_string(passages).map_err(|e| {
        ProviderError::new(ProviderErrorKind::Unavailable(format!(
            "Failed to read {}: {}",
            passages.display(),
            e
        )))
    })?;
    let store = InMemoryContentProvider::from_json(&json)?;
    info!(passages = store.len(), "Loaded passages");

    let provider = CachedContentProvider::new(store, PassageCacheConfig::default());
    let engine = VerseEngine::new(config, Arc::new(provider));

    let message = InboundMessageBuilder::default()
        .author(author)
        .body(text)
        .permalink(permalink)
        .build()
        .map_err(|e| RequestError::new(RequestErrorKind::InvalidContext(e.to_string())))?;

    let mut context = RequestContextBuilder::default();
    if let Some(community) = community {
        context.community(community);
    }
    let context = context
        .build()
        .map_err(|e| RequestError::new(RequestErrorKind::InvalidContext(e.to_string())))?;

    let reply = engine.respond(text, &message, &context).await?;
    println!("{}", reply);
    Ok(())
}
