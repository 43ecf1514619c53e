// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use tracing::info;

use crate::extract::{extract_media, MediaList};
use crate::fetch::{FetchConfig, HttpFetcher, PageFetcher, UrlPolicy};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
pub struct ExtractArgs {
    /// Read HTML from a local file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fetch HTML from a URL
    #[arg(long)]
    pub url: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Allow fetching from loopback/private hosts
    #[arg(long, env = "ALLOW_PRIVATE_HOSTS")]
    pub allow_private_hosts: bool,
}

/// Load the page HTML named by the arguments
pub async fn load_html(args: &ExtractArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let url = args.url.as_deref().context("either --file or --url is required")?;
    let target = UrlPolicy::new(args.allow_private_hosts).check(url)?;

    let config = FetchConfig {
        allow_private_hosts: args.allow_private_hosts,
        ..FetchConfig::from_env()
    };
    let fetcher = HttpFetcher::new(config)?;
    let html = fetcher.fetch_html(target.as_str()).await?;
    info!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}

/// Render a media list as JSON
pub fn render(media: &MediaList, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(media)?
    } else {
        serde_json::to_string_pretty(media)?
    };
    Ok(json)
}

pub async fn run(args: ExtractArgs) -> Result<()> {
    let html = load_html(&args).await?;
    let media = extract_media(&html);
    println!("{}", render(&media, args.compact)?);
    Ok(())
}
