//! Install command implementation
//!
//! Adds the four fixed dependency groups (base development, data handling,
//! file I/O, exploratory analysis) to the project manifest. Runs the
//! initializer first so the manifest is guaranteed to exist.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use labkit::bootstrap;
use labkit::config::Workspace;
use labkit::defaults;
use labkit::output::{emoji, OutputConfig};

/// Arguments for the install command
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Project root directory (defaults to current directory)
    #[arg(long, value_name = "PATH", env = "LABKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the install command
pub fn execute(args: InstallArgs, output: &OutputConfig) -> Result<()> {
    let workspace = Workspace::resolve(args.root, None)?;

    if !args.quiet {
        println!(
            "{} Installing {} dependency groups",
            emoji(output, "📦", "[INSTALL]"),
            defaults::DEPENDENCY_GROUPS.len()
        );
    }

    bootstrap::install_groups(&workspace)?;

    if !args.quiet {
        println!("{} Dependencies added", emoji(output, "✅", "[OK]"));
    }

    Ok(())
}
