//! CLI argument parsing and command dispatch
//!
//! The command surface is an explicit enumerated type: each workflow is a
//! named subcommand, and unrecognized names fail with clap's standard error
//! rather than resolving arbitrary strings to handlers. Invoking `labkit`
//! with no subcommand runs the default workflow: clone, then sync, aborting
//! if either step fails.

use anyhow::Result;
use env_logger::Env;
use labkit::output::OutputConfig;

use clap::{Parser, Subcommand};

use crate::commands;

/// labkit - Bootstrap a data-science working environment
#[derive(Parser, Debug)]
#[command(name = "labkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; with none, runs clone followed by sync
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone the project repository and overlay its contents onto the working tree
    Clone(commands::clone::CloneArgs),

    /// Create the source tree, activation hook, manifest, and a synced environment
    Init(commands::init::InitArgs),

    /// Add the fixed data-analysis dependency groups to the manifest
    Install(commands::install::InstallArgs),

    /// Re-initialize, re-install, and re-synchronize the environment
    Sync(commands::sync::SyncArgs),

    /// Delete generated environment state, then rebuild from a clean slate
    ResetDev(commands::reset::ResetArgs),

    /// Delete every file tracked by version control (irreversible)
    Purge(commands::purge::PurgeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(Env::default().default_filter_or(&self.log_level))
            .format_timestamp(None)
            .init();
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Some(Commands::Clone(args)) => commands::clone::execute(args, &output),
            Some(Commands::Init(args)) => commands::init::execute(args, &output),
            Some(Commands::Install(args)) => commands::install::execute(args, &output),
            Some(Commands::Sync(args)) => commands::sync::execute(args, &output),
            Some(Commands::ResetDev(args)) => commands::reset::execute(args, &output),
            Some(Commands::Purge(args)) => commands::purge::execute(args, &output),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => {
                // Default workflow: clone, then sync, in that order
                commands::clone::execute(Default::default(), &output)?;
                commands::sync::execute(Default::default(), &output)
            }
        }
    }
}
