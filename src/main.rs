// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use media_fetch_node::{
    api::ApiServer,
    cache::ResultCache,
    config::AppConfig,
    fetch::{HttpFetcher, UrlPolicy},
    service::MediaService,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting media fetch node {}", media_fetch_node::version::VERSION);

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {}", e))?;

    if config.fetch.allow_private_hosts {
        warn!("ALLOW_PRIVATE_HOSTS is set: loopback and private targets can be fetched");
    }

    let fetcher = Arc::new(HttpFetcher::new(config.fetch.clone())?);
    let cache = ResultCache::from_config(&config.cache);
    info!(
        "Result cache: {} entries, {}s TTL",
        config.cache.max_entries, config.cache.ttl_secs
    );

    let service = Arc::new(MediaService::new(
        fetcher,
        cache,
        UrlPolicy::new(config.fetch.allow_private_hosts),
    ));

    let server = ApiServer::bind(&config.api, service).await?;
    info!("Server running on port {}", server.local_addr().port());
    if let Some(dir) = &config.api.static_dir {
        info!("Serving static files from {}", dir.display());
    }

    server.serve(shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
