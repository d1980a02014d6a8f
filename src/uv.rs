//! Subprocess wrapper for the environment/dependency tool (`uv`).
//!
//! Three operations cover everything labkit needs: create a project
//! manifest, add a dependency group, and synchronize the environment with
//! the manifest. Each invocation runs in an explicit working directory and
//! is checked before the caller proceeds; dependency resolution, lock-file
//! mechanics, and virtual-environment internals all belong to the tool.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Create a project manifest in `dir` (`uv init`).
///
/// Also writes the interpreter version pin and the generated entry-point
/// file, both owned by the tool.
pub fn init_project(dir: &Path) -> Result<()> {
    run(dir, &["init"])
}

/// Add a group of packages to the manifest in `dir` (`uv add`).
///
/// Re-adding an already-present package is a no-op from the tool's
/// perspective, so repeated installs are safe.
pub fn add(dir: &Path, packages: &[&str], dev: bool) -> Result<()> {
    run(dir, &add_args(packages, dev))
}

/// Synchronize the environment in `dir` with its manifest (`uv sync`).
///
/// Creates or updates the virtual environment and the lock file so both
/// match the manifest.
pub fn sync(dir: &Path) -> Result<()> {
    run(dir, &["sync"])
}

/// Compose the argument vector for an `add` invocation.
fn add_args<'a>(packages: &[&'a str], dev: bool) -> Vec<&'a str> {
    let mut args = vec!["add"];
    if dev {
        args.push("--dev");
    }
    args.extend_from_slice(packages);
    args
}

/// Run `uv` with `args` inside `dir`, mapping any failure to a typed error
/// carrying the rendered command line and the tool's stderr.
fn run(dir: &Path, args: &[&str]) -> Result<()> {
    let command = render_command(args);
    debug!("running: {} in {}", command, dir.display());

    let output = Command::new("uv")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::EnvTool {
            command: command.clone(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::EnvTool {
            command,
            stderr: stderr.to_string(),
        });
    }

    Ok(())
}

/// Render an argument vector as the command line shown in errors and logs.
fn render_command(args: &[&str]) -> String {
    format!("uv {}", args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args_plain_group() {
        let args = add_args(&["polars", "pandas"], false);
        assert_eq!(args, vec!["add", "polars", "pandas"]);
    }

    #[test]
    fn test_add_args_dev_group() {
        let args = add_args(&["ruff", "pytest"], true);
        assert_eq!(args, vec!["add", "--dev", "ruff", "pytest"]);
    }

    #[test]
    fn test_render_command() {
        assert_eq!(render_command(&["sync"]), "uv sync");
        assert_eq!(
            render_command(&["add", "--dev", "ruff"]),
            "uv add --dev ruff"
        );
    }

    #[test]
    fn test_run_missing_directory_is_env_tool_error() {
        let result = run(Path::new("/nonexistent/labkit-test-dir"), &["sync"]);
        match result {
            Err(Error::EnvTool { command, .. }) => assert_eq!(command, "uv sync"),
            other => panic!("expected EnvTool error, got {:?}", other),
        }
    }
}
