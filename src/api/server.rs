// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::Router;
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use super::http_server::{create_router, AppState};
use super::rate_limiter::ClientRateLimiter;
use crate::service::MediaService;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit_per_minute: u32,
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rate_limit_per_minute: 60,
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limit_per_minute),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        self.listen_addr()
            .parse::<SocketAddr>()
            .map_err(|e| format!("invalid listen address '{}': {}", self.listen_addr(), e))?;
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(format!("static_dir {} is not a directory", dir.display()));
            }
        }
        Ok(())
    }
}

/// Bound HTTP server, ready to serve
pub struct ApiServer {
    listener: TcpListener,
    router: Router,
    addr: SocketAddr,
}

impl ApiServer {
    pub async fn bind(config: &ApiConfig, service: Arc<MediaService>) -> Result<Self> {
        let addr: SocketAddr = config.listen_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let state = AppState::new(service, ClientRateLimiter::new(config.rate_limit_per_minute));
        let router = create_router(state, config.static_dir.clone());

        Ok(Self {
            listener,
            router,
            addr: actual_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("API server listening on {}", self.addr);

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        info!("API server stopped");
        Ok(())
    }
}
