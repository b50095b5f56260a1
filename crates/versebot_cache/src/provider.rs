//! Caching decorator for content providers.

use crate::{PassageCache, PassageCacheConfig};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};
use versebot_core::{Passage, PassageQuery};
use versebot_error::VerseBotResult;
use versebot_interface::ContentProvider;

/// Content provider that answers repeated queries from a [`PassageCache`].
///
/// Only successful fetches are cached; a failed fetch is retried on the next
/// request for the same passage.
///
/// # Example
///
/// ```rust,ignore
/// let provider = CachedContentProvider::new(http_provider, PassageCacheConfig::default());
/// let passage = provider.fetch(&query).await?;
/// ```
pub struct CachedContentProvider<P> {
    inner: P,
    cache: Mutex<PassageCache>,
}

impl<P: ContentProvider> CachedContentProvider<P> {
    /// Wrap a provider with a cache.
    pub fn new(inner: P, config: PassageCacheConfig) -> Self {
        Self {
            inner,
            cache: Mutex::new(PassageCache::new(config)),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached passages.
    pub fn cached(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    fn lookup(&self, query: &PassageQuery) -> Option<Passage> {
        match self.cache.lock() {
            Ok(mut cache) => cache.get(query),
            Err(e) => {
                warn!(error = %e, "Passage cache lock poisoned, bypassing cache");
                None
            }
        }
    }

    fn store(&self, query: &PassageQuery, passage: Passage) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(query, passage);
        }
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for CachedContentProvider<P> {
    #[instrument(
        skip(self, query),
        fields(provider = self.inner.provider_name(), book = %query.book_name())
    )]
    async fn fetch(&self, query: &PassageQuery) -> VerseBotResult<Passage> {
        if let Some(passage) = self.lookup(query) {
            debug!("Serving passage from cache");
            return Ok(passage);
        }

        let passage = self.inner.fetch(query).await?;
        self.store(query, passage.clone());
        Ok(passage)
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
