//! Reset command implementation
//!
//! Deletes generated environment state (direnv cache, virtual environment,
//! version pin, generated entry point, manifest, lock file), then rebuilds
//! everything through the sync pipeline. Deletion is best-effort: absent
//! paths are skipped, and a missing source directory is not an error.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the reset-dev command
#[derive(Args, Debug, Default)]
pub struct ResetArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the reset-dev command
pub fn execute(args: ResetArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, None)?;

    if !args.quiet {
        println!(
            "{} Resetting environment state in {}",
            emoji(output, "🧹", "[RESET]"),
            workspace.root().display()
        );
    }

    bootstrap::reset(&workspace)?;

    if !args.quiet {
        println!(
            "{} Environment rebuilt from a clean slate",
            emoji(output, "✅", "[OK]")
        );
    }

    Ok(())
}
