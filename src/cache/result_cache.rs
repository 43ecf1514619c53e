// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LRU + TTL cache for extraction results

use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::config::CacheConfig;
use crate::extract::MediaList;

/// Bounded cache from source URL to its extracted media
///
/// Entries expire a fixed duration after insertion whether or not they are
/// read. When full, inserting a new key evicts the least-recently-used entry;
/// a successful `get` counts as a use. All mutation happens under one lock.
pub struct ResultCache {
    inner: Mutex<CacheInner>,
    ttl: Duration,
}

struct CacheInner {
    entries: LruCache<String, CachedEntry>,
    hits: u64,
    misses: u64,
    expired: u64,
    evictions: u64,
}

struct CachedEntry {
    media: MediaList,
    /// None when the TTL runs past what `Instant` can represent
    expires_at: Option<Instant>,
}

impl CachedEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCacheStats {
    /// Entries currently held (some may be expired but not yet read)
    pub entries: usize,
    /// Maximum cache capacity
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    /// Entries removed because they expired
    pub expired: u64,
    /// Entries dropped to make room for new keys
    pub evictions: u64,
}

impl ResultCache {
    /// Create a new result cache
    ///
    /// # Arguments
    /// * `ttl_secs` - Time-to-live for entries in seconds
    /// * `max_entries` - Maximum number of entries; 0 is treated as 1
    pub fn new(ttl_secs: u64, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(CacheInner {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
                expired: 0,
                evictions: 0,
            }),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl_secs, config.max_entries)
    }

    /// Get the cached media for `key`
    ///
    /// Returns None if not found or expired; an expired entry is removed.
    pub fn get(&self, key: &str) -> Option<MediaList> {
        self.get_at(key, Instant::now())
    }

    /// Store `media` under `key`, replacing any previous entry
    pub fn put(&self, key: &str, media: MediaList) {
        self.put_at(key, media, Instant::now());
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<MediaList> {
        let mut inner = self.inner.lock().ok()?;

        // `get` promotes the key to most recently used
        let lookup = inner
            .entries
            .get(key)
            .map(|entry| entry.is_live(now).then(|| entry.media.clone()));

        match lookup {
            Some(Some(media)) => {
                inner.hits += 1;
                Some(media)
            }
            Some(None) => {
                inner.entries.pop(key);
                inner.expired += 1;
                inner.misses += 1;
                None
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    fn put_at(&self, key: &str, media: MediaList, now: Instant) {
        let entry = CachedEntry {
            media,
            expires_at: now.checked_add(self.ttl),
        };

        let mut inner = match self.inner.lock() {
            Ok(c) => c,
            Err(_) => return,
        };

        // push hands back either the replaced value for this key or the evicted LRU pair
        if let Some((displaced, _)) = inner.entries.push(key.to_string(), entry) {
            if displaced != key {
                inner.evictions += 1;
            }
        }
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut inner = match self.inner.lock() {
            Ok(c) => c,
            Err(_) => return 0,
        };

        let stale: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_live(now))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &stale {
            inner.entries.pop(key);
        }
        inner.expired += stale.len() as u64;
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get cache statistics
    pub fn stats(&self) -> ResultCacheStats {
        match self.inner.lock() {
            Ok(inner) => ResultCacheStats {
                entries: inner.entries.len(),
                capacity: inner.entries.cap().get(),
                hits: inner.hits,
                misses: inner.misses,
                expired: inner.expired,
                evictions: inner.evictions,
            },
            Err(_) => ResultCacheStats::default(),
        }
    }
}
