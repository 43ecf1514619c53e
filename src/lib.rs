// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod service;
pub mod version;

pub use api::{ApiConfig, ApiServer};
pub use cache::{CacheConfig, ResultCache};
pub use config::AppConfig;
pub use extract::{extract_media, MediaItem, MediaKind, MediaList};
pub use fetch::{FetchConfig, FetchError, HttpFetcher, PageFetcher, UrlPolicy};
pub use service::{MediaLookup, MediaService};
