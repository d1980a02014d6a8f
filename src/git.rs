//! Subprocess wrapper for the version-control client.
//!
//! This uses the system git command, which automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Clone a repository into `target_dir`.
///
/// The target directory is removed first if it exists (git refuses to clone
/// into a non-empty directory), and the clone result is checked before the
/// caller gets to touch the directory: a failed clone is a fatal error, not
/// a silently-empty tree.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("running: git clone {} {}", url, target_dir.display());
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: Some("make sure git is installed and on PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful hint for common auth failures
        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "authentication failed; for private repos, ensure an SSH key is added \
                 to ssh-agent or credentials/tokens are configured"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr.to_string(),
            hint,
        });
    }

    Ok(())
}

/// List every file tracked by version control under `root`.
///
/// Returns paths relative to `root`, exactly as git reports them. Untracked
/// files never appear in the listing.
pub fn tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("running: git ls-files -z in {}", root.display());
    let output = Command::new("git")
        .args(["ls-files", "-z"])
        .current_dir(root)
        .output()
        .map_err(|e| Error::GitCommand {
            command: "ls-files -z".to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command: "ls-files -z".to_string(),
            stderr: stderr.to_string(),
        });
    }

    Ok(parse_file_list(&output.stdout))
}

/// Parse NUL-separated `git ls-files -z` output into relative paths.
fn parse_file_list(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|byte| *byte == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| PathBuf::from(String::from_utf8_lossy(entry).into_owned()))
        .collect()
}
