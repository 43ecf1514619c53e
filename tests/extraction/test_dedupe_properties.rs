// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! De-duplication and ordering properties of extraction results

use media_fetch_node::extract::{extract_media, MediaKind, MediaList};
use std::collections::HashSet;

fn assert_unique(list: &MediaList) {
    let mut seen = HashSet::new();
    for item in list {
        assert!(seen.insert(item.url()), "duplicate url {}", item.url());
    }
}

#[test]
fn test_empty_html_yields_empty_list() {
    assert!(extract_media("").is_empty());
}

#[test]
fn test_single_og_image() {
    let media = extract_media(r#"<meta property="og:image" content="X">"#);
    assert_eq!(media.len(), 1);
    let item = &media.as_slice()[0];
    assert_eq!(item.kind(), MediaKind::Image);
    assert_eq!(item.url(), "X");
}

#[test]
fn test_meta_tag_wins_over_json_ld_duplicate() {
    let html = r#"
        <meta property="og:image" content="X">
        <script type="application/ld+json">{"image": ["X", "Y"]}</script>
    "#;
    let media = extract_media(html);
    let urls: Vec<&str> = media.iter().map(|m| m.url()).collect();
    assert_eq!(urls, vec!["X", "Y"]);
}

#[test]
fn test_video_then_image_with_same_url_keeps_video() {
    let html = r#"
        <meta property="og:video" content="same">
        <script type="application/ld+json">{"image": "same"}</script>
    "#;
    let media = extract_media(html);
    assert_eq!(media.len(), 1);
    assert_eq!(media.as_slice()[0].kind(), MediaKind::Video);
}

#[test]
fn test_results_never_contain_duplicates() {
    let pages = [
        r#"<script type="application/ld+json">{"image": ["a", "a", "b", "a"]}</script>"#,
        r#"<meta property="og:image" content="a"><meta property="og:video" content="a">"#,
        r#"<script>window._sharedData = {"entry_data":{"PostPage":[{"graphql":{"shortcode_media":{"__typename":"GraphSidecar","edge_sidecar_to_children":{"edges":[{"node":{"display_url":"d"}},{"node":{"display_url":"d"}}]}}}}]}};</script>"#,
        crate::common::POST_PAGE,
    ];

    for html in pages {
        assert_unique(&extract_media(html));
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extract_media(crate::common::POST_PAGE);
    let second = extract_media(crate::common::POST_PAGE);
    assert_eq!(first, second);
}
