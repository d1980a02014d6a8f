//! # Bootstrap Workflows
//!
//! The orchestration core: each public function here is one workflow over
//! the external tools, sequenced fail-fast. Every step is a checked
//! subprocess or filesystem result; nothing proceeds past a failure, and
//! nothing depends on the process working directory.
//!
//! Workflows compose top-down:
//!
//! - `clone_overlay`: clone the remote into a temporary directory, then
//!   overlay its contents onto the project root.
//! - `initialize`: ensure the source tree, activation hook, manifest, and
//!   a synchronized environment exist (idempotent).
//! - `install_groups`: initialize, then add the four fixed dependency
//!   groups to the manifest.
//! - `synchronize`: initialize, install, and run one final sync so the
//!   lock state matches the manifest.
//! - `reset`: delete generated environment state, then synchronize from a
//!   clean slate.
//! - `purge`: delete every tracked file, keeping untracked artifacts.

use std::fs;
use std::io::ErrorKind;

use log::info;

use crate::config::Workspace;
use crate::defaults;
use crate::error::Result;
use crate::{git, overlay, uv};

/// Clone the remote repository and overlay its contents onto the project
/// root.
///
/// The clone lands in a fixed-name temporary directory which is removed
/// unconditionally afterwards, whether or not the clone or the merge
/// succeeded. A failed clone is fatal before any merging happens, so a
/// partial or absent temporary directory can never silently turn into a
/// no-op merge.
pub fn clone_overlay(workspace: &Workspace) -> Result<()> {
    let tmp = workspace.clone_dir();

    let merged = git::clone(workspace.remote_url(), &tmp)
        .and_then(|_| overlay::merge_tree(&tmp, workspace.root()));
    let cleanup = overlay::remove_path(&tmp);

    merged?;
    cleanup
}

/// Ensure the source tree exists, the activation hook is written, the
/// manifest exists, and the environment is synchronized to it.
///
/// Safe to call repeatedly: the directory creation is idempotent, the hook
/// is overwritten with identical fixed content, the manifest is only
/// created when absent, and re-syncing an unchanged manifest changes
/// nothing.
pub fn initialize(workspace: &Workspace) -> Result<()> {
    let source_dir = workspace.source_dir();
    fs::create_dir_all(&source_dir)?;

    fs::write(workspace.activation_hook(), defaults::ACTIVATION_COMMAND)?;

    if !workspace.manifest().exists() {
        info!("no manifest found, creating project in {}", source_dir.display());
        uv::init_project(&source_dir)?;
    }

    uv::sync(&source_dir)
}

/// Add the four fixed dependency groups to the manifest.
///
/// Initializes first so the manifest is guaranteed to exist. Group order is
/// fixed; all additions are unconditional and re-adding is a no-op for the
/// tool.
pub fn install_groups(workspace: &Workspace) -> Result<()> {
    initialize(workspace)?;

    let source_dir = workspace.source_dir();
    for group in defaults::DEPENDENCY_GROUPS {
        info!("adding {} packages", group.name);
        uv::add(&source_dir, group.packages, group.dev)?;
    }

    Ok(())
}

/// Re-initialize, re-install, and re-synchronize the environment.
///
/// `install_groups` re-runs the initializer, which is redundant but
/// harmless by idempotence. The trailing sync guarantees the lock state
/// matches the manifest after the additions.
pub fn synchronize(workspace: &Workspace) -> Result<()> {
    initialize(workspace)?;
    install_groups(workspace)?;
    uv::sync(&workspace.source_dir())
}

/// Delete generated environment state, then rebuild everything.
///
/// Deletion is best-effort (absent paths are skipped); the source directory
/// itself and user-authored files are never touched. The subsequent
/// synchronize recreates the manifest, lock file, and virtual environment
/// from scratch.
pub fn reset(workspace: &Workspace) -> Result<()> {
    for target in workspace.reset_targets() {
        overlay::remove_path(&target)?;
    }

    synchronize(workspace)
}

/// Delete every file tracked by version control under the project root.
///
/// Untracked files (build artifacts, ignored caches) are retained. Returns
/// the number of files removed. Irreversible, no confirmation.
pub fn purge(workspace: &Workspace) -> Result<usize> {
    let tracked = git::tracked_files(workspace.root())?;

    let mut removed = 0;
    for relative in &tracked {
        match fs::remove_file(workspace.root().join(relative)) {
            Ok(()) => removed += 1,
            // A listed file already gone from the working tree is fine
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    info!("purged {} of {} tracked files", removed, tracked.len());
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &std::path::Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_purge_removes_exactly_the_tracked_set() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "--quiet"]);

        fs::write(dir.path().join("tracked-a.txt"), b"a").unwrap();
        fs::create_dir_all(dir.path().join("src/py")).unwrap();
        fs::write(dir.path().join("src/py/app.py"), b"pass").unwrap();
        fs::write(dir.path().join("untracked.log"), b"keep").unwrap();
        git(dir.path(), &["add", "tracked-a.txt", "src/py/app.py"]);

        let workspace = Workspace::new(dir.path());
        let removed = purge(&workspace).unwrap();

        assert_eq!(removed, 2);
        assert!(!dir.path().join("tracked-a.txt").exists());
        assert!(!dir.path().join("src/py/app.py").exists());
        assert!(dir.path().join("untracked.log").exists());
    }

    #[test]
    fn test_purge_with_no_tracked_files() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "--quiet"]);
        fs::write(dir.path().join("untracked.txt"), b"x").unwrap();

        let workspace = Workspace::new(dir.path());
        assert_eq!(purge(&workspace).unwrap(), 0);
        assert!(dir.path().join("untracked.txt").exists());
    }

    #[test]
    fn test_purge_outside_a_repository_fails() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path());
        assert!(purge(&workspace).is_err());
    }

    #[test]
    fn test_clone_overlay_from_local_repository() {
        let upstream = TempDir::new().unwrap();
        git(upstream.path(), &["init", "--quiet"]);
        fs::write(upstream.path().join("README.md"), b"# project").unwrap();
        fs::create_dir_all(upstream.path().join("src/py")).unwrap();
        fs::write(upstream.path().join("src/py/app.py"), b"pass").unwrap();
        git(upstream.path(), &["add", "."]);
        git(
            upstream.path(),
            &[
                "-c",
                "user.name=test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "--quiet",
                "-m",
                "seed",
            ],
        );

        let dir = TempDir::new().unwrap();
        let workspace =
            Workspace::new(dir.path()).with_remote(upstream.path().display().to_string());

        clone_overlay(&workspace).unwrap();

        assert!(dir.path().join("README.md").exists());
        assert!(dir.path().join("src/py/app.py").exists());
        assert!(dir.path().join(".git").exists());
        // Temporary clone directory is gone afterwards
        assert!(!workspace.clone_dir().exists());
    }

    #[test]
    fn test_clone_overlay_failed_clone_merges_nothing() {
        let dir = TempDir::new().unwrap();
        let workspace =
            Workspace::new(dir.path()).with_remote("/nonexistent/labkit-missing-remote");

        let result = clone_overlay(&workspace);

        assert!(result.is_err());
        assert!(!workspace.clone_dir().exists());
        // Nothing was overlaid into the root
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
