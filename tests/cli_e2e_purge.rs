//! End-to-end tests for the `purge` command
//!
//! Purge must remove exactly the set of tracked files reported by version
//! control at invocation time, retaining untracked artifacts.

mod common;
use common::prelude::*;

/// Purge removes tracked files and keeps untracked ones
#[test]
fn test_purge_removes_only_tracked_files() {
    let project = TempDir::new().unwrap();
    git(project.path(), &["init", "--quiet"]);

    project.child("tracked.txt").write_str("tracked").unwrap();
    project
        .child("src/py/app.py")
        .write_str("print('hi')")
        .unwrap();
    project.child("build/output.bin").write_str("artifact").unwrap();
    git(project.path(), &["add", "tracked.txt", "src/py/app.py"]);

    let mut cmd = cargo_bin_cmd!("labkit");

    cmd.arg("purge")
        .arg("--root")
        .arg(project.path())
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 tracked files"));

    project.child("tracked.txt").assert(predicate::path::missing());
    project
        .child("src/py/app.py")
        .assert(predicate::path::missing());
    project
        .child("build/output.bin")
        .assert(predicate::path::exists());
}

/// Purge on a repository with nothing tracked removes nothing
#[test]
fn test_purge_empty_index() {
    let project = TempDir::new().unwrap();
    git(project.path(), &["init", "--quiet"]);
    project.child("untracked.txt").write_str("keep").unwrap();

    let mut cmd = cargo_bin_cmd!("labkit");

    cmd.arg("purge")
        .arg("--root")
        .arg(project.path())
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 tracked files"));

    project.child("untracked.txt").assert(predicate::path::exists());
}

/// Purge outside a repository surfaces the git failure
#[test]
fn test_purge_outside_repository_fails() {
    let project = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("labkit");

    cmd.arg("purge")
        .arg("--root")
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git command failed"));
}

/// Quiet mode suppresses the summary line
#[test]
fn test_purge_quiet() {
    let project = TempDir::new().unwrap();
    git(project.path(), &["init", "--quiet"]);
    project.child("tracked.txt").write_str("x").unwrap();
    git(project.path(), &["add", "tracked.txt"]);

    let mut cmd = cargo_bin_cmd!("labkit");

    cmd.arg("purge")
        .arg("--root")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
