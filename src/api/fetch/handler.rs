// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media lookup endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};

use super::request::UrlQuery;
use super::response::MediaApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /api/fetch?url=... - Extract media URLs from a post page
///
/// # Response
/// - `media`: Array of `{type, url}` with `type` one of `image`, `video`
/// - `cached`: Whether the result was served from cache
/// - `count`, `url`, `fetchTimeMs`
///
/// # Errors
/// - 400 Bad Request: Missing or malformed `url`
/// - 403 Forbidden: `url` targets a private host
/// - 429 Too Many Requests: Rate limited
/// - 502 Bad Gateway: Upstream fetch failed
/// - 504 Gateway Timeout: Upstream fetch timed out
pub async fn fetch_media_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<MediaApiResponse>, ApiError> {
    let url = query.validate()?;
    debug!("Media request: {}", url);

    let lookup = state.service.lookup(url).await?;

    info!(
        "Media lookup complete: {} item(s) for '{}' (cached: {})",
        lookup.media.len(),
        lookup.url,
        lookup.cached
    );

    Ok(Json(MediaApiResponse::from(lookup)))
}
