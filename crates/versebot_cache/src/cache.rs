//! Recency-ordered passage store with expiry.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use versebot_core::{Passage, PassageQuery};

/// Passage cache settings.
///
/// ```toml
/// ttl_secs = 86400
/// capacity = 1000
/// enabled = true
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
#[serde(default)]
pub struct PassageCacheConfig {
    /// Seconds a fetched passage is served before it is fetched again
    ttl_secs: u64,
    /// Most passages held at once
    capacity: usize,
    /// When false, nothing is stored
    enabled: bool,
}

impl Default for PassageCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 86_400,
            capacity: 1000,
            enabled: true,
        }
    }
}

#[derive(Debug)]
struct Slot {
    passage: Passage,
    stored: Instant,
    stamp: u64,
}

/// Passages keyed by the query that fetched them.
///
/// Entries older than the TTL are treated as missing. When full, the
/// passage read or written longest ago is evicted.
///
/// # Example
///
/// ```
/// use versebot_cache::{PassageCache, PassageCacheConfig};
/// use versebot_core::{BookId, Passage, PassageQuery, Reference};
///
/// let mut cache = PassageCache::new(PassageCacheConfig::default());
/// let query = PassageQuery::new("John", BookId(43), Reference::new("3", "16"), "ESV");
///
/// cache.insert(&query, Passage::new("For God so loved...", "John 3:16", "ESV"));
/// assert_eq!(cache.get(&query).unwrap().verse_title(), "John 3:16");
/// ```
#[derive(Debug)]
pub struct PassageCache {
    config: PassageCacheConfig,
    slots: HashMap<PassageQuery, Slot>,
    /// Use stamp to query, oldest first
    recency: BTreeMap<u64, PassageQuery>,
    clock: u64,
}

impl PassageCache {
    /// Create an empty cache.
    pub fn new(config: PassageCacheConfig) -> Self {
        debug!(
            ttl_secs = config.ttl_secs,
            capacity = config.capacity,
            enabled = config.enabled,
            "Creating passage cache"
        );
        Self {
            config,
            slots: HashMap::new(),
            recency: BTreeMap::new(),
            clock: 0,
        }
    }

    /// Fresh passage for a query, marking it as recently used.
    pub fn get(&mut self, query: &PassageQuery) -> Option<Passage> {
        if !self.config.enabled {
            return None;
        }
        let ttl = Duration::from_secs(self.config.ttl_secs);

        let slot = self.slots.get_mut(query)?;
        if slot.stored.elapsed() > ttl {
            let stamp = slot.stamp;
            self.recency.remove(&stamp);
            self.slots.remove(query);
            trace!(book = %query.book_name(), "Cached passage expired");
            return None;
        }

        self.clock += 1;
        self.recency.remove(&slot.stamp);
        slot.stamp = self.clock;
        self.recency.insert(self.clock, query.clone());
        Some(slot.passage.clone())
    }

    /// Store a passage, evicting the least recently used one when full.
    pub fn insert(&mut self, query: &PassageQuery, passage: Passage) {
        if !self.config.enabled || self.config.capacity == 0 {
            return;
        }

        self.clock += 1;
        let slot = Slot {
            passage,
            stored: Instant::now(),
            stamp: self.clock,
        };
        match self.slots.insert(query.clone(), slot) {
            Some(previous) => {
                self.recency.remove(&previous.stamp);
            }
            None if self.slots.len() > self.config.capacity => self.evict_oldest(),
            None => {}
        }
        self.recency.insert(self.clock, query.clone());
    }

    /// Number of stored passages, expired ones included until next read.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn evict_oldest(&mut self) {
        if let Some((_, query)) = self.recency.pop_first() {
            self.slots.remove(&query);
            debug!(
                book = %query.book_name(),
                chapter = query.chapter(),
                translation = %query.translation(),
                "Evicted least recently used passage"
            );
        }
    }
}
