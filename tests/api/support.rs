// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router construction and request helpers for endpoint tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use media_fetch_node::{
    api::{create_router, AppState, ClientRateLimiter},
    cache::ResultCache,
    fetch::UrlPolicy,
    service::MediaService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use crate::common::StubFetcher;

pub struct TestApp {
    pub router: Router,
    pub fetcher: Arc<StubFetcher>,
    pub service: Arc<MediaService>,
}

pub fn build_app(fetcher: StubFetcher, requests_per_minute: u32) -> TestApp {
    build_app_with_static(fetcher, requests_per_minute, None)
}

pub fn build_app_with_static(
    fetcher: StubFetcher,
    requests_per_minute: u32,
    static_dir: Option<PathBuf>,
) -> TestApp {
    let fetcher = Arc::new(fetcher);
    let service = Arc::new(MediaService::new(
        fetcher.clone(),
        ResultCache::new(300, 500),
        UrlPolicy::new(false),
    ));
    let state = AppState::new(service.clone(), ClientRateLimiter::new(requests_per_minute));

    TestApp {
        router: create_router(state, static_dir),
        fetcher,
        service,
    }
}

/// Percent-encode a URL for use as a query value
pub fn encode(url: &str) -> String {
    url::form_urlencoded::byte_serialize(url.as_bytes()).collect()
}

pub async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(router, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}
