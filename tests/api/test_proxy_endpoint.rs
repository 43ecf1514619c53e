// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /api/proxy

use axum::http::{header, StatusCode};

use super::support::{body_bytes, body_json, build_app, encode, get};
use crate::common::StubFetcher;

#[tokio::test]
async fn test_proxy_streams_body_with_content_type() {
    let url = "https://cdn.example.com/p/clip.mp4";
    let app = build_app(
        StubFetcher::new().with_file(url, Some("video/mp4"), vec![b"chunk-1,", b"chunk-2"]),
        100,
    );

    let response = get(&app.router, &format!("/api/proxy?url={}", encode(url))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "video/mp4");
    assert_eq!(body_bytes(response).await, b"chunk-1,chunk-2".to_vec());
}

#[tokio::test]
async fn test_proxy_defaults_content_type() {
    let url = "https://cdn.example.com/blob";
    let app = build_app(StubFetcher::new().with_file(url, None, vec![b"raw"]), 100);

    let response = get(&app.router, &format!("/api/proxy?url={}", encode(url))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn test_proxy_missing_url() {
    let app = build_app(StubFetcher::new(), 100);

    let response = get(&app.router, "/api/proxy").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing url");
}

#[tokio::test]
async fn test_proxy_upstream_failure() {
    let app = build_app(StubFetcher::new(), 100);

    let uri = format!("/api/proxy?url={}", encode("https://cdn.example.com/missing"));
    let response = get(&app.router, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_proxy_refuses_loopback() {
    let app = build_app(StubFetcher::new(), 100);

    let uri = format!("/api/proxy?url={}", encode("http://localhost:3000/.env"));
    let response = get(&app.router, &uri).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
