// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stage orchestration and de-duplication

use scraper::Html;
use tracing::debug;

use super::types::{MediaItem, MediaList};
use super::{embedded_state, meta_tags, structured_data};

/// Page input shared by all stages
///
/// The DOM is parsed once; the embedded-state stage reads the raw text.
pub struct ParsedPage<'a> {
    raw: &'a str,
    document: Html,
}

impl<'a> ParsedPage<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            document: Html::parse_document(raw),
        }
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn document(&self) -> &Html {
        &self.document
    }
}

/// One independent extraction heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    MetaTags,
    StructuredData,
    EmbeddedState,
}

impl Stage {
    /// Stages in the order their candidates are concatenated
    pub const ALL: [Stage; 3] = [Stage::MetaTags, Stage::StructuredData, Stage::EmbeddedState];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::MetaTags => "meta_tags",
            Stage::StructuredData => "structured_data",
            Stage::EmbeddedState => "embedded_state",
        }
    }

    /// Run this stage alone. Never fails; absence yields an empty vec.
    pub fn run(&self, page: &ParsedPage<'_>) -> Vec<MediaItem> {
        match self {
            Stage::MetaTags => meta_tags::extract(page.document()),
            Stage::StructuredData => structured_data::extract(page.document()),
            Stage::EmbeddedState => embedded_state::extract(page.raw()),
        }
    }
}

/// Extract the de-duplicated media list from raw HTML
///
/// Every stage runs regardless of what the others found. Candidates are
/// concatenated in stage order and the first occurrence of each URL wins.
pub fn extract_media(html: &str) -> MediaList {
    let page = ParsedPage::parse(html);

    let mut candidates = Vec::new();
    for stage in Stage::ALL {
        let found = stage.run(&page);
        debug!("Stage {} found {} candidate(s)", stage.name(), found.len());
        candidates.extend(found);
    }

    MediaList::dedupe(candidates)
}
