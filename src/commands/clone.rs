//! Clone command implementation
//!
//! Clones the hardcoded remote repository into a fixed-name temporary
//! directory, checks the clone succeeded, overlays the temporary
//! directory's full contents onto the project root, and removes the
//! temporary directory unconditionally afterwards.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the clone command
#[derive(Args, Debug, Default)]
pub struct CloneArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Remote repository URL to clone
    #[arg(long, value_name = "URL", env = "LABKIT_REMOTE")]
    pub remote: Option<String>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the clone command
pub fn execute(args: CloneArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, args.remote)?;

    if !args.quiet {
        println!(
            "{} Cloning {} into {}",
            emoji(output, "🔽", "[CLONE]"),
            workspace.remote_url(),
            workspace.root().display()
        );
    }

    bootstrap::clone_overlay(&workspace)?;

    if !args.quiet {
        println!("{} Working tree updated", emoji(output, "✅", "[OK]"));
    }

    Ok(())
}
