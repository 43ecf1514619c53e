// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-client rate limiting for `/api` routes

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::clock::{Clock, DefaultClock};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use tracing::debug;

use super::errors::ApiError;
use super::http_server::AppState;

/// Tracked client count above which idle limiter state is dropped
const MAX_TRACKED_CLIENTS: usize = 10_000;

/// Rate limiter keyed by client IP
pub struct ClientRateLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    clock: DefaultClock,
    requests_per_minute: u32,
}

impl ClientRateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `requests_per_minute` - Maximum requests per client per minute (0 becomes 60)
    pub fn new(requests_per_minute: u32) -> Self {
        let requests_per_minute = if requests_per_minute == 0 {
            60
        } else {
            requests_per_minute
        };
        let rpm = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(rpm)),
            clock: DefaultClock::default(),
            requests_per_minute: rpm.get(),
        }
    }

    /// Check if a request from `client` is allowed
    ///
    /// Returns Ok(()) if allowed, or ApiError::RateLimitExceeded if not
    pub fn check(&self, client: IpAddr) -> Result<(), ApiError> {
        if self.limiter.len() > MAX_TRACKED_CLIENTS {
            self.limiter.retain_recent();
        }

        self.limiter.check_key(&client).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.clock.now());
            ApiError::RateLimitExceeded {
                retry_after: wait.as_secs().max(1),
            }
        })
    }

    /// Get the configured requests per minute
    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }
}

/// Reject `/api` requests from clients over their quota
///
/// Requests without connection info (in-process tests) share one bucket.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    match state.rate_limiter.check(client) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            debug!("Rate limited client {}", client);
            e.into_response()
        }
    }
}
