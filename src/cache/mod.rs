// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-memory cache of extraction results
//!
//! Process-wide, recreated empty on startup, never persisted.

pub mod config;
pub mod result_cache;

pub use config::CacheConfig;
pub use result_cache::{ResultCache, ResultCacheStats};
