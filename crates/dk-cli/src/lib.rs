// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Command-line interface for repository deploy keys

pub mod config;
pub mod keys;

pub use clap::Parser;

use clap::Subcommand;
use dk_logging::CliLoggingArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dk", author, version, about = "Manage SSH deploy keys on a Git server")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Git server root URL
    #[arg(long, env = "DK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Access token sent as a bearer credential
    #[arg(long, env = "DK_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[command(flatten)]
    pub logging: CliLoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grant an SSH public key access to a repository
    Create(keys::CreateArgs),
}

impl Cli {
    /// Build the client configuration from the config file and overrides
    pub fn client_config(&self) -> anyhow::Result<dk_rest_client::ClientConfig> {
        let file = match &self.config {
            Some(path) => Some((config::FileConfig::load(path)?, path.clone())),
            None => None,
        };
        config::resolve(file, self.base_url.clone(), self.token.clone())
    }
}
