//! Passage caching with expiry and least-recently-used eviction.
//!
//! This crate caches fetched passages so repeated citations of the same
//! passage do not hit the content provider again. [`CachedContentProvider`]
//! wraps any [`ContentProvider`](versebot_interface::ContentProvider).

#![warn(missing_docs)]

mod cache;
mod provider;

pub use cache::{PassageCache, PassageCacheConfig, PassageCacheConfigBuilder};
pub use provider::CachedContentProvider;
