// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod extract;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Media Fetch Node CLI
#[derive(Parser, Debug)]
#[command(name = "media-fetch-cli")]
#[command(version)]
#[command(about = "Offline tools for the media fetch node", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract media URLs from a saved page or a live URL
    Extract(extract::ExtractArgs),

    /// Print version and feature information
    Version,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => extract::run(args).await,
        Commands::Version => {
            println!("{}", crate::version::get_version_info());
            Ok(())
        }
    }
}
