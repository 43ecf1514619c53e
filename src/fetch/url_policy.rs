// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outbound URL validation

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use url::{Host, Url};

use super::types::FetchError;

/// Decides which URLs the service may fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlPolicy {
    allow_private_hosts: bool,
}

impl UrlPolicy {
    pub fn new(allow_private_hosts: bool) -> Self {
        Self {
            allow_private_hosts,
        }
    }

    /// Parse `raw` and check it is an http(s) URL to a public host
    pub fn check(&self, raw: &str) -> Result<Url, FetchError> {
        let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let host = url
            .host()
            .ok_or_else(|| FetchError::InvalidUrl(format!("{} has no host", raw)))?;

        if !self.allow_private_hosts && is_refused_host(&host) {
            return Err(FetchError::UnsafeUrl(raw.to_string()));
        }

        Ok(url)
    }

    pub fn allows_private_hosts(&self) -> bool {
        self.allow_private_hosts
    }

    /// Whether a resolved address may be connected to
    pub fn allows_ip(&self, ip: IpAddr) -> bool {
        self.allow_private_hosts || !is_refused_ip(ip)
    }
}

fn is_refused_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_refused_ipv4(&v4),
        IpAddr::V6(v6) => is_refused_ipv6(&v6),
    }
}

fn is_refused_host(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(domain) => {
            let domain = domain.to_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Host::Ipv4(ip) => is_refused_ipv4(ip),
        Host::Ipv6(ip) => is_refused_ipv6(ip),
    }
}

fn is_refused_ipv4(ip: &Ipv4Addr) -> bool {
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
}

fn is_refused_ipv6(ip: &Ipv6Addr) -> bool {
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_refused_ipv4(&v4);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        // fc00::/7 unique local
        || (first & 0xfe00) == 0xfc00
        // fe80::/10 link local
        || (first & 0xffc0) == 0xfe80
}
