// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proxy endpoint handler

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::fetch::UrlQuery;
use crate::api::http_server::AppState;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// GET /api/proxy?url=... - Stream remote content back to the caller
///
/// The upstream status and `Content-Type` are relayed; a missing or
/// unrepresentable content type becomes `application/octet-stream`.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    let url = query.validate()?;
    debug!("Proxy request: {}", url);

    let proxied = state.service.proxy(url).await?;

    let status = StatusCode::from_u16(proxied.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = proxied
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from_stream(proxied.body))
        .map_err(|e| ApiError::InternalError(e.to_string()))
}
