// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Embedded page-state stage
//!
//! Looks for the `window._sharedData = {...};` assignment in the raw page
//! text. The capture is non-greedy and ends at the first `};`, so a JSON
//! string value containing `};` cuts the blob short and the stage yields
//! nothing. Existing results depend on this exact matching.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::trace;

use super::types::MediaItem;

const SHARED_DATA_PATTERN: &str = r"window\._sharedData\s*=\s*(\{[\s\S]*?\});";

const TYPE_SIDECAR: &str = "GraphSidecar";
const TYPE_VIDEO: &str = "GraphVideo";

fn shared_data_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(SHARED_DATA_PATTERN).expect("shared data pattern is valid"))
}

/// Capture the text of the first `window._sharedData` object literal
pub fn capture_blob(html: &str) -> Option<&str> {
    shared_data_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Media described by the embedded post state, if any
pub fn extract(html: &str) -> Vec<MediaItem> {
    let Some(blob) = capture_blob(html) else {
        return Vec::new();
    };

    let state: Value = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            trace!("Embedded state is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    match shortcode_media(&state) {
        Some(entry) => entry_media(entry),
        None => Vec::new(),
    }
}

/// `entry_data.PostPage[0].graphql.shortcode_media`
fn shortcode_media(state: &Value) -> Option<&Value> {
    state
        .get("entry_data")?
        .get("PostPage")?
        .get(0)?
        .get("graphql")?
        .get("shortcode_media")
        .filter(|v| !v.is_null())
}

fn type_name(node: &Value) -> Option<&str> {
    node.get("__typename").and_then(Value::as_str)
}

fn entry_media(entry: &Value) -> Vec<MediaItem> {
    if type_name(entry) != Some(TYPE_SIDECAR) {
        return node_media(entry).into_iter().collect();
    }

    let Some(edges) = entry
        .get("edge_sidecar_to_children")
        .and_then(|c| c.get("edges"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut media = Vec::new();
    for edge in edges {
        // A malformed edge ends the walk; earlier children are kept
        let Some(node) = edge.get("node").filter(|n| !n.is_null()) else {
            break;
        };
        media.extend(node_media(node));
    }
    media
}

fn node_media(node: &Value) -> Option<MediaItem> {
    if type_name(node) == Some(TYPE_VIDEO) {
        node.get("video_url")
            .and_then(Value::as_str)
            .and_then(MediaItem::video)
    } else {
        node.get("display_url")
            .and_then(Value::as_str)
            .and_then(MediaItem::image)
    }
}
