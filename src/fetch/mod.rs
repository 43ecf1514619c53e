// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outbound fetching
//!
//! The network side of the service: page HTML for extraction and raw bytes
//! for the proxy. Callers validate targets with [`UrlPolicy`] first.

pub mod config;
pub mod http;
pub mod types;
pub mod url_policy;

pub use config::FetchConfig;
pub use http::HttpFetcher;
pub use types::{ByteStream, FetchError, PageFetcher, ProxiedBody};
pub use url_policy::UrlPolicy;

#[cfg(test)]
pub use types::MockPageFetcher;
