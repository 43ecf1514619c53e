// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Collects the per-module configs so the binary loads and validates them
//! in one place.

use crate::api::ApiConfig;
use crate::cache::CacheConfig;
use crate::fetch::FetchConfig;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            fetch: FetchConfig::from_env(),
            cache: CacheConfig::from_env(),
        }
    }

    /// Validate every section, reporting all problems at once
    pub fn validate(&self) -> Result<(), String> {
        let errors: Vec<String> = [
            self.api.validate().map_err(|e| format!("api: {}", e)),
            self.fetch.validate().map_err(|e| format!("fetch: {}", e)),
            self.cache.validate().map_err(|e| format!("cache: {}", e)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}
