//! Command-line entry point for w3w

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use w3w_cli::commands::{AppContext, Commands};
use w3w_cli::config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "w3w")]
#[command(about = "Find, check and resolve three-word addresses")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// API key for remote commands
    #[arg(long, global = true, env = "W3W_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Service root for remote commands
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Merge the config file with flags; flags win
    fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if let Some(key) = &self.api_key {
            config.api.key = Some(key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = Some(base_url.clone());
        }
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Arguments: {:?}", cli);
    let ctx = AppContext::new(cli.resolve_config()?);
    cli.command.execute(&ctx)
}
