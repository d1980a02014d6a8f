//! Sync command implementation
//!
//! Runs the full environment pipeline: initialize, install dependency
//! groups, then one final synchronize so the lock state matches the
//! manifest.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the sync command
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, None)?;

    if !args.quiet {
        println!(
            "{} Synchronizing environment in {}",
            emoji(output, "🔄", "[SYNC]"),
            workspace.source_dir().display()
        );
    }

    bootstrap::synchronize(&workspace)?;

    if !args.quiet {
        println!(
            "{} Manifest and lock state consistent",
            emoji(output, "✅", "[OK]")
        );
    }

    Ok(())
}
