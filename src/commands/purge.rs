//! Purge command implementation
//!
//! Deletes every file tracked by version control under the project root,
//! retaining untracked files (build artifacts, ignored caches). No
//! confirmation prompt: the operation is immediate and irreversible.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the purge command
#[derive(Args, Debug, Default)]
pub struct PurgeArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the purge command
pub fn execute(args: PurgeArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, None)?;

    let removed = bootstrap::purge(&workspace)?;

    if !args.quiet {
        println!(
            "{} Removed {} tracked files",
            emoji(output, "🗑️", "[PURGE]"),
            removed
        );
    }

    Ok(())
}
