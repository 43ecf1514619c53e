// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media URL extraction from post pages
//!
//! Three best-effort stages each contribute candidates:
//! - Open Graph `og:image` / `og:video` meta tags
//! - `image` fields of JSON-LD blocks
//! - the `window._sharedData` embedded state blob
//!
//! ```text
//! HTML ─┬─> meta_tags ───────┐
//!       ├─> structured_data ─┼─> concat ─> dedupe ─> MediaList
//!       └─> embedded_state ──┘
//! ```
//!
//! A stage that finds nothing, or chokes on malformed input, contributes an
//! empty vec. Extraction as a whole never fails.

pub mod embedded_state;
pub mod extractor;
pub mod meta_tags;
pub mod structured_data;
pub mod types;

pub use extractor::{extract_media, ParsedPage, Stage};
pub use types::{MediaItem, MediaKind, MediaList};
