// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the extraction result cache

use std::env;

/// Longest accepted entry lifetime (one week)
pub const MAX_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Result cache settings
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum entries before the least-recently-used one is evicted (default: 500)
    pub max_entries: usize,
    /// Time-to-live from insertion in seconds (default: 300 = 5 minutes)
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env::var("MEDIA_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            ttl_secs: env::var("MEDIA_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_secs),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("max_entries must be at least 1".to_string());
        }
        if self.ttl_secs > MAX_TTL_SECS {
            return Err(format!("ttl_secs must be at most {}", MAX_TTL_SECS));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 500,
            ttl_secs: 300,
        }
    }
}
