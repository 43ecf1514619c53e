// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media API response types

use serde::Serialize;

use crate::extract::MediaList;
use crate::service::MediaLookup;

/// Response body for GET /api/fetch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaApiResponse {
    /// Discovered media, de-duplicated, in discovery order
    pub media: MediaList,

    /// Whether the result was served from cache
    pub cached: bool,

    /// Number of media items
    pub count: usize,

    /// Source page URL as requested
    pub url: String,

    /// Time spent fetching and extracting in milliseconds
    pub fetch_time_ms: u64,
}

impl From<MediaLookup> for MediaApiResponse {
    fn from(lookup: MediaLookup) -> Self {
        Self {
            count: lookup.media.len(),
            media: lookup.media,
            cached: lookup.cached,
            url: lookup.url,
            fetch_time_ms: lookup.elapsed_ms,
        }
    }
}
