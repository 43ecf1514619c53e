// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::Serialize;

use super::http_server::AppState;
use crate::cache::ResultCacheStats;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache: ResultCacheStats,
    pub rate_limit_per_minute: u32,
}

/// GET /health - Expired cache entries are purged before stats are reported
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    state.service.purge_expired();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::version::VERSION.to_string(),
        cache: state.service.cache_stats(),
        rate_limit_per_minute: state.rate_limiter.requests_per_minute(),
    })
}
