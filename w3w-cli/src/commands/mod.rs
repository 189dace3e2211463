//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context as _, Result};
use clap::Subcommand;
use std::future::Future;
use w3w_api::Service;

pub mod check;
pub mod convert;
pub mod find;
pub mod generate_config;
pub mod grid;
pub mod languages;
pub mod suggest;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find three-word addresses in text, files or stdin
    Find(find::FindArgs),

    /// Check whether a string is, or nearly is, a three-word address
    Check(check::CheckArgs),

    /// Convert coordinates to a three-word address
    #[command(name = "convert-to-3wa")]
    ConvertTo3wa(convert::ConvertTo3waArgs),

    /// Convert a three-word address to coordinates
    #[command(name = "convert-to-coords")]
    ConvertToCoords(convert::ConvertToCoordsArgs),

    /// Suggest addresses for partial or misspelled input
    Suggest(suggest::SuggestArgs),

    /// Print the grid lines inside a bounding box
    Grid(grid::GridArgs),

    /// List the languages addresses are available in
    Languages(languages::LanguagesArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Commands::Find(args) => args.execute(ctx),
            Commands::Check(args) => args.execute(ctx),
            Commands::ConvertTo3wa(args) => args.execute(ctx),
            Commands::ConvertToCoords(args) => args.execute(ctx),
            Commands::Suggest(args) => args.execute(ctx),
            Commands::Grid(args) => args.execute(ctx),
            Commands::Languages(args) => args.execute(ctx),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Settings shared by every command after flags and file are merged
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    /// Effective configuration
    pub config: CliConfig,
}

impl AppContext {
    /// Wrap a resolved configuration
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Client for the remote API; fails without an API key
    pub fn service(&self) -> Result<Service> {
        let config = self.config.api_config()?;
        Service::new(config).context("Failed to create HTTP client")
    }

    /// Run a remote call to completion
    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        Ok(runtime.block_on(future))
    }

    /// Whether JSON output should be pretty printed
    pub fn pretty_json(&self) -> bool {
        self.config.output.pretty_json
    }
}
