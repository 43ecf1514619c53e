// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media descriptors produced by the extractor

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind of media a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One discovered media URL
///
/// Identity is the URL alone: two items with the same URL and different
/// kinds are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    kind: MediaKind,
    url: String,
}

impl MediaItem {
    /// Build an item, rejecting empty URLs
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            return None;
        }
        Some(Self { kind, url })
    }

    pub fn image(url: impl Into<String>) -> Option<Self> {
        Self::new(MediaKind::Image, url)
    }

    pub fn video(url: impl Into<String>) -> Option<Self> {
        Self::new(MediaKind::Video, url)
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Ordered, duplicate-free list of media items
///
/// The only way to build one is [`MediaList::dedupe`], so no two items ever
/// share a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MediaList(Vec<MediaItem>);

impl MediaList {
    /// Keep the first occurrence of each URL, preserving candidate order
    pub fn dedupe<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = MediaItem>,
    {
        let mut seen = HashSet::new();
        let items = candidates
            .into_iter()
            .filter(|item| seen.insert(item.url.clone()))
            .collect();
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[MediaItem] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<MediaItem> {
        self.0
    }
}

impl<'a> IntoIterator for &'a MediaList {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
