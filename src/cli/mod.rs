//! Command-line interface definitions.

pub mod check;
pub mod list;
pub mod output;
pub mod remove;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Config;

/// berth - deployment instance resolution and removal.
#[derive(Parser, Debug)]
#[command(name = "berth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove a deployment by instance name, routed hostname, or project
    Remove(RemoveArgs),

    /// List an owner's instances
    List(ListArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Instance name, routed hostname, or project to remove
    pub target: String,

    /// Owner the removal is scoped to
    #[arg(long)]
    pub owner: String,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Owner whose instances to list
    #[arg(long)]
    pub owner: String,
}

/// Subcommands for `berth check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Dispatch a parsed command.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Remove(args) => remove::execute(&cli, args).await,
        Commands::List(args) => list::execute(&cli, args).await,
        Commands::Check(CheckCommand::Config) => check::config(&cli),
    }
}

/// Resolve the config path and load it, applying CLI overrides.
pub(crate) fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}
