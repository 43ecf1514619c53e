// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Open Graph meta tag stage

use scraper::{Html, Selector};

use super::types::MediaItem;

const OG_IMAGE: &str = r#"meta[property="og:image"]"#;
const OG_VIDEO: &str = r#"meta[property="og:video"]"#;

/// Read `og:image` then `og:video` from the first matching meta tags
pub fn extract(document: &Html) -> Vec<MediaItem> {
    let mut media = Vec::new();

    if let Some(item) = first_content(document, OG_IMAGE).and_then(MediaItem::image) {
        media.push(item);
    }
    if let Some(item) = first_content(document, OG_VIDEO).and_then(MediaItem::video) {
        media.push(item);
    }

    media
}

/// `content` attribute of the first element matching `selector`
fn first_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(str::to_string)
}
