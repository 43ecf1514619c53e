// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /api/fetch

use axum::http::StatusCode;

use super::support::{build_app, encode, get_json};
use crate::common::{StubFetcher, POST_PAGE};

const POST_URL: &str = "https://www.example.com/p/abc/";

#[tokio::test]
async fn test_fetch_returns_extracted_media() {
    let app = build_app(StubFetcher::new().with_page(POST_URL, POST_PAGE), 100);

    let (status, json) = get_json(&app.router, &format!("/api/fetch?url={}", encode(POST_URL))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cached"], false);
    assert_eq!(json["count"], 5);
    assert_eq!(json["url"], POST_URL);
    assert_eq!(json["media"][0]["type"], "image");
    assert_eq!(json["media"][0]["url"], "https://cdn.example.com/p/cover.jpg");
    assert_eq!(json["media"][1]["type"], "video");
}

#[tokio::test]
async fn test_second_fetch_is_cached() {
    let app = build_app(StubFetcher::new().with_page(POST_URL, POST_PAGE), 100);
    let uri = format!("/api/fetch?url={}", encode(POST_URL));

    let (_, first) = get_json(&app.router, &uri).await;
    let (status, second) = get_json(&app.router, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(first["media"], second["media"]);
    assert_eq!(app.fetcher.html_calls(), 1);
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let app = build_app(StubFetcher::new(), 100);

    for uri in ["/api/fetch", "/api/fetch?url=", "/api/fetch?url=%20%20"] {
        let (status, json) = get_json(&app.router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(json["error"], "Missing url");
        assert_eq!(json["errorType"], "missing_parameter");
    }
    assert_eq!(app.fetcher.html_calls(), 0);
}

#[tokio::test]
async fn test_malformed_url_is_bad_request() {
    let app = build_app(StubFetcher::new(), 100);

    let (status, json) = get_json(&app.router, "/api/fetch?url=not-a-url").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errorType"], "invalid_request");
}

#[tokio::test]
async fn test_private_host_is_forbidden() {
    let app = build_app(StubFetcher::new(), 100);

    let uri = format!("/api/fetch?url={}", encode("http://169.254.169.254/latest"));
    let (status, json) = get_json(&app.router, &uri).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["errorType"], "forbidden");
    assert_eq!(app.fetcher.html_calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway_and_not_cached() {
    let app = build_app(StubFetcher::new(), 100);
    let uri = format!("/api/fetch?url={}", encode("https://www.example.com/p/gone/"));

    let (status, json) = get_json(&app.router, &uri).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["errorType"], "upstream_error");

    let _ = get_json(&app.router, &uri).await;
    assert_eq!(app.fetcher.html_calls(), 2);
    assert!(app.service.cache().is_empty());
}

#[tokio::test]
async fn test_page_without_media_returns_empty_list() {
    let url = "https://www.example.com/about";
    let app = build_app(
        StubFetcher::new().with_page(url, "<html><body>About us</body></html>"),
        100,
    );

    let (status, json) = get_json(&app.router, &format!("/api/fetch?url={}", encode(url))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["media"], serde_json::json!([]));
    assert_eq!(json["count"], 0);
}
