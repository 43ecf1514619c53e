// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch collaborator contract

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use thiserror::Error;

/// Errors that can occur while fetching upstream content
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL targets a loopback, private or link-local host
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),

    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// Network or protocol failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// Body could not be read
    #[error("Error reading body: {0}")]
    Body(String),
}

/// Streamed upstream body
pub type ByteStream = BoxStream<'static, Result<Bytes, FetchError>>;

/// Upstream response relayed by the proxy
pub struct ProxiedBody {
    /// Upstream status code
    pub status: u16,
    /// Upstream `Content-Type`, if it sent one
    pub content_type: Option<String>,
    pub body: ByteStream,
}

impl std::fmt::Debug for ProxiedBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxiedBody")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Source of page HTML and proxied bytes
///
/// The extraction core never performs I/O itself; everything that touches
/// the network goes through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and return its body as text
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch arbitrary content as a byte stream
    async fn fetch_bytes(&self, url: &str) -> Result<ProxiedBody, FetchError>;
}
