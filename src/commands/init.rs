//! Init command implementation
//!
//! Ensures the source tree exists, writes the activation hook, creates the
//! manifest when absent, and synchronizes the environment. Idempotent:
//! repeated runs with an unchanged manifest leave everything as-is.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, None)?;

    if !args.quiet {
        println!(
            "{} Initializing environment in {}",
            emoji(output, "🎯", "[INIT]"),
            workspace.source_dir().display()
        );
    }

    bootstrap::initialize(&workspace)?;

    if !args.quiet {
        println!("{} Environment synchronized", emoji(output, "✅", "[OK]"));
    }

    Ok(())
}
