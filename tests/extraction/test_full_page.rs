// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end extraction over a realistic post page

use crate::common::POST_PAGE;
use media_fetch_node::extract::{extract_media, MediaKind, ParsedPage, Stage};

#[test]
fn test_full_page_media_in_discovery_order() {
    let media = extract_media(POST_PAGE);

    let found: Vec<(MediaKind, &str)> = media.iter().map(|m| (m.kind(), m.url())).collect();
    assert_eq!(
        found,
        vec![
            (MediaKind::Image, "https://cdn.example.com/p/cover.jpg"),
            (MediaKind::Video, "https://cdn.example.com/p/clip.mp4"),
            (MediaKind::Image, "https://cdn.example.com/p/alt.jpg"),
            (MediaKind::Video, "https://cdn.example.com/p/side.mp4"),
            (MediaKind::Image, "https://cdn.example.com/p/last.jpg"),
        ]
    );
}

#[test]
fn test_full_page_per_stage_counts() {
    let page = ParsedPage::parse(POST_PAGE);

    assert_eq!(Stage::MetaTags.run(&page).len(), 2);
    // The second JSON-LD block is malformed and contributes nothing
    assert_eq!(Stage::StructuredData.run(&page).len(), 2);
    assert_eq!(Stage::EmbeddedState.run(&page).len(), 3);
}

#[test]
fn test_sidecar_video_poster_is_not_reported() {
    let media = extract_media(POST_PAGE);
    assert!(media
        .iter()
        .all(|m| m.url() != "https://cdn.example.com/p/side-poster.jpg"));
}
