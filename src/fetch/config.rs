// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for outbound fetching
//!
//! Defines timeouts, client identity and the private-host guard.

use std::env;

/// Configuration for page and proxy fetches
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Total timeout for an HTML page fetch in seconds (default: 15)
    pub timeout_secs: u64,
    /// Connect timeout for every outbound request in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// User-Agent header sent upstream (default: "Mozilla/5.0")
    pub user_agent: String,
    /// Maximum redirects followed (default: 5)
    pub max_redirects: usize,
    /// Allow loopback/private/link-local targets (default: false)
    pub allow_private_hosts: bool,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: env::var("FETCH_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            user_agent: env::var("FETCH_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            max_redirects: defaults.max_redirects,
            allow_private_hosts: env::var("ALLOW_PRIVATE_HOSTS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            connect_timeout_secs: 10,
            user_agent: "Mozilla/5.0".to_string(),
            max_redirects: 5,
            allow_private_hosts: false,
        }
    }
}
