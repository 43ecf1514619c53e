// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media lookup orchestration
//!
//! Coordinates URL validation, the result cache, the fetcher and the extractor.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::{ResultCache, ResultCacheStats};
use crate::extract::{extract_media, MediaList};
use crate::fetch::{FetchError, PageFetcher, ProxiedBody, UrlPolicy};

/// Result of a media lookup
#[derive(Debug, Clone)]
pub struct MediaLookup {
    /// Source page URL as requested
    pub url: String,
    pub media: MediaList,
    /// Whether the media came from the result cache
    pub cached: bool,
    /// Time spent fetching and extracting in milliseconds (0 when cached)
    pub elapsed_ms: u64,
}

/// Main service behind the media and proxy endpoints
pub struct MediaService {
    fetcher: Arc<dyn PageFetcher>,
    cache: ResultCache,
    policy: UrlPolicy,
}

impl MediaService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: ResultCache, policy: UrlPolicy) -> Self {
        Self {
            fetcher,
            cache,
            policy,
        }
    }

    /// Return the media found on the page at `url`
    ///
    /// Served from cache when a live entry exists; otherwise the page is
    /// fetched, extracted and the result cached. Fetch failures are returned
    /// as-is and nothing is cached.
    pub async fn lookup(&self, url: &str) -> Result<MediaLookup, FetchError> {
        let target = self.policy.check(url)?;

        if let Some(media) = self.cache.get(url) {
            debug!("Media cache hit for: {}", url);
            return Ok(MediaLookup {
                url: url.to_string(),
                media,
                cached: true,
                elapsed_ms: 0,
            });
        }

        let start = Instant::now();

        let html = self.fetcher.fetch_html(target.as_str()).await.map_err(|e| {
            warn!("Page fetch failed for {}: {}", url, e);
            e
        })?;

        let media = extract_media(&html);
        self.cache.put(url, media.clone());

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Extracted {} media item(s) from {} in {}ms",
            media.len(),
            url,
            elapsed_ms
        );

        Ok(MediaLookup {
            url: url.to_string(),
            media,
            cached: false,
            elapsed_ms,
        })
    }

    /// Open a byte stream to `url` for the proxy endpoint
    pub async fn proxy(&self, url: &str) -> Result<ProxiedBody, FetchError> {
        let target = self.policy.check(url)?;
        self.fetcher.fetch_bytes(target.as_str()).await.map_err(|e| {
            warn!("Proxy fetch failed for {}: {}", url, e);
            e
        })
    }

    /// Drop expired cache entries, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let purged = self.cache.purge_expired();
        if purged > 0 {
            debug!("Purged {} expired media cache entries", purged);
        }
        purged
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> ResultCacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}
