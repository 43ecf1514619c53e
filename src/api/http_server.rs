// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{middleware, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::fetch::fetch_media_handler;
use super::handlers::health_handler;
use super::proxy::proxy_handler;
use super::rate_limiter::{rate_limit_middleware, ClientRateLimiter};
use crate::service::MediaService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MediaService>,
    pub rate_limiter: Arc<ClientRateLimiter>,
}

impl AppState {
    pub fn new(service: Arc<MediaService>, rate_limiter: ClientRateLimiter) -> Self {
        Self {
            service,
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}

/// Build the application router
///
/// `/api/*` is rate limited per client; `/health` is not. When `static_dir`
/// is set, unmatched paths are served from it.
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/fetch", get(fetch_media_handler))
        .route("/proxy", get(proxy_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
