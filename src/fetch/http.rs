// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! reqwest-backed fetcher

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::redirect::{Action, Attempt, Policy};
use reqwest::{header, Client};
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::config::FetchConfig;
use super::types::{FetchError, PageFetcher, ProxiedBody};
use super::url_policy::UrlPolicy;

/// HTTP fetcher used in production
///
/// Every redirect hop and every resolved address is checked against the
/// [`UrlPolicy`] built from the config, so a public URL cannot bounce or
/// resolve to a private host.
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let policy = UrlPolicy::new(config.allow_private_hosts);
        let max_redirects = config.max_redirects;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::custom(move |attempt| {
                redirect_action(attempt, policy, max_redirects)
            }));

        if !policy.allows_private_hosts() {
            builder = builder.dns_resolver(Arc::new(PolicyResolver { policy }));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn map_send_error(url: &str, e: reqwest::Error) -> FetchError {
        if let Some(refused) = policy_error(&e) {
            warn!("Refused upstream target while fetching {}: {}", url, refused);
            return refused;
        }
        if e.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

/// Decide whether a redirect to `next` is followed
///
/// `requested` counts the URLs already requested in this chain, the
/// original one included.
pub fn check_redirect(
    policy: &UrlPolicy,
    next: &Url,
    requested: usize,
    max_redirects: usize,
) -> Result<(), FetchError> {
    if requested > max_redirects {
        return Err(FetchError::Http(format!(
            "too many redirects (limit {})",
            max_redirects
        )));
    }
    policy.check(next.as_str()).map(|_| ())
}

fn redirect_action(attempt: Attempt<'_>, policy: UrlPolicy, max_redirects: usize) -> Action {
    let requested = attempt.previous().len();
    match check_redirect(&policy, attempt.url(), requested, max_redirects) {
        Ok(()) => attempt.follow(),
        Err(e) => attempt.error(e),
    }
}

/// Find a [`FetchError`] raised by the redirect policy or resolver
fn policy_error(e: &reqwest::Error) -> Option<FetchError> {
    let mut source: Option<&(dyn StdError + 'static)> = e.source();
    while let Some(err) = source {
        if let Some(fetch_error) = err.downcast_ref::<FetchError>() {
            return Some(fetch_error.clone());
        }
        source = err.source();
    }
    None
}

/// System resolver that drops addresses the policy refuses
struct PolicyResolver {
    policy: UrlPolicy,
}

impl Resolve for PolicyResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let policy = self.policy;
        Box::pin(async move {
            let host = name.as_str().to_string();
            let resolved = tokio::net::lookup_host((host.as_str(), 0)).await?;
            let allowed: Vec<SocketAddr> = resolved.filter(|addr| policy.allows_ip(addr.ip())).collect();

            if allowed.is_empty() {
                let refused: Box<dyn StdError + Send + Sync> = Box::new(FetchError::UnsafeUrl(host));
                return Err(refused);
            }
            let addrs: Addrs = Box::new(allowed.into_iter());
            Ok(addrs)
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching page: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| Self::map_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<ProxiedBody, FetchError> {
        debug!("Proxying: {}", url);

        // No total timeout; media bodies may stream for minutes
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_send_error(url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| FetchError::Body(e.to_string())))
            .boxed();

        Ok(ProxiedBody {
            status,
            content_type,
            body,
        })
    }
}
