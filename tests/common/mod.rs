//! Shared test utilities for the E2E suites.
//!
//! Provides a small git helper and an upstream-repository fixture so tests
//! can exercise clone and purge against real local repositories without
//! touching the network.

use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::{git, seed_upstream_repo};
}

/// Run a git command inside `dir`, panicking on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// Turn `dir` into a committed repository with a README and a small Python
/// source tree, suitable as a local clone remote.
#[allow(dead_code)]
pub fn seed_upstream_repo(dir: &Path) {
    git(dir, &["init", "--quiet"]);
    std::fs::write(dir.join("README.md"), "# fixture project\n").unwrap();
    std::fs::create_dir_all(dir.join("src/py")).unwrap();
    std::fs::write(dir.join("src/py/app.py"), "print('hello')\n").unwrap();
    git(dir, &["add", "."]);
    git(
        dir,
        &[
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "--quiet",
            "-m",
            "seed fixture",
        ],
    );
}
