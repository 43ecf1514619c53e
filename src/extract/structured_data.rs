// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! JSON-LD structured data stage

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::trace;

use super::types::MediaItem;

const LD_JSON_SCRIPT: &str = r#"script[type="application/ld+json"]"#;

/// Collect `image` entries from every JSON-LD block, in document order
///
/// A block that fails to parse contributes nothing.
pub fn extract(document: &Html) -> Vec<MediaItem> {
    let selector = match Selector::parse(LD_JSON_SCRIPT) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|script| {
            let text = script.text().collect::<String>();
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => Some(value),
                Err(e) => {
                    trace!("Skipping malformed JSON-LD block: {}", e);
                    None
                }
            }
        })
        .flat_map(|value| images_of(&value))
        .collect()
}

fn images_of(value: &Value) -> Vec<MediaItem> {
    match value.get("image") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(MediaItem::image)
            .collect(),
        Some(Value::String(url)) => MediaItem::image(url.as_str()).into_iter().collect(),
        _ => Vec::new(),
    }
}
