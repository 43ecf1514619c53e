// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod http_server;
pub mod proxy;
pub mod rate_limiter;
pub mod server;

pub use errors::{ApiError, ErrorResponse};
pub use fetch::{fetch_media_handler, MediaApiResponse, UrlQuery};
pub use handlers::HealthResponse;
pub use http_server::{create_router, AppState};
pub use proxy::proxy_handler;
pub use rate_limiter::ClientRateLimiter;
pub use server::{ApiConfig, ApiServer};
