// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the media fetch node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-media-extraction-2026-10-15";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-15";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "og-meta-extraction",
    "json-ld-extraction",
    "embedded-state-extraction",
    "lru-ttl-result-cache",
    "byte-proxy",
    "per-ip-rate-limiting",
    "private-host-guard",
];

/// Get version information as a formatted string
pub fn get_version_info() -> String {
    format!(
        "Media Fetch Node {} ({})\nFeatures: {}",
        VERSION_NUMBER,
        BUILD_DATE,
        FEATURES.join(", ")
    )
}
