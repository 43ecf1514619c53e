// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! A failing stage never blocks the others

use media_fetch_node::extract::{extract_media, MediaKind};

#[test]
fn test_malformed_json_ld_does_not_block_other_stages() {
    let html = r#"
        <meta property="og:image" content="https://cdn/meta.jpg">
        <script type="application/ld+json">{"image": ["https://cdn/ld.jpg",</script>
        <script>window._sharedData = {"entry_data":{"PostPage":[{"graphql":{"shortcode_media":{"__typename":"GraphVideo","video_url":"https://cdn/state.mp4"}}}]}};</script>
    "#;

    let media = extract_media(html);
    let found: Vec<(MediaKind, &str)> = media
        .iter()
        .map(|m| (m.kind(), m.url()))
        .collect();
    assert_eq!(
        found,
        vec![
            (MediaKind::Image, "https://cdn/meta.jpg"),
            (MediaKind::Video, "https://cdn/state.mp4"),
        ]
    );
}

#[test]
fn test_malformed_embedded_state_keeps_earlier_stages() {
    let html = r#"
        <script type="application/ld+json">{"image": "https://cdn/ld.jpg"}</script>
        <script>window._sharedData = {"entry_data": oops};</script>
    "#;
    let media = extract_media(html);
    let urls: Vec<&str> = media.iter().map(|m| m.url()).collect();
    assert_eq!(urls, vec!["https://cdn/ld.jpg"]);
}

#[test]
fn test_only_first_shared_data_blob_is_used() {
    let html = r#"
        <script>window._sharedData = {"entry_data":{}};</script>
        <script>window._sharedData = {"entry_data":{"PostPage":[{"graphql":{"shortcode_media":{"display_url":"second"}}}]}};</script>
    "#;
    assert!(extract_media(html).is_empty());
}

#[test]
fn test_huge_page_without_media() {
    let filler = "<p>lorem ipsum dolor sit amet</p>".repeat(20_000);
    let html = format!("<html><body>{}</body></html>", filler);
    assert!(extract_media(&html).is_empty());
}
