//! Working-tree overlay merge and best-effort removal.
//!
//! The cloner drops a repository into a temporary directory and then merges
//! the directory's full contents (tracked and untracked alike, including
//! the version-control directory) into the project root. The merge is a
//! recursive copy that preserves file permissions and overwrites existing
//! files, matching archive-and-extract semantics without changing the
//! process working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Merge the contents of `src` into `dst`, overwriting existing entries.
///
/// Directories are created as needed, regular files are copied with their
/// permission bits, and symlinks are recreated as links (on Unix) rather
/// than dereferenced. `src` itself is not copied, only its contents.
pub fn merge_tree(src: &Path, dst: &Path) -> Result<()> {
    let overlay_error = |message: String| Error::Overlay {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        message,
    };

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| overlay_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| overlay_error(e.to_string()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            remove_existing_file(&target)?;
            // fs::copy carries permission bits over on Unix
            fs::copy(entry.path(), &target)?;
        }
    }

    debug!("merged {} into {}", src.display(), dst.display());
    Ok(())
}

/// Delete a file or directory tree; a missing path is not an error.
pub fn remove_path(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
        Ok(metadata) => {
            debug!("removing {}", path.display());
            if metadata.is_dir() {
                fs::remove_dir_all(path)?;
            } else {
                fs::remove_file(path)?;
            }
            Ok(())
        }
    }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(src)?;
    remove_existing_file(target)?;
    std::os::unix::fs::symlink(link, target)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, target: &Path) -> Result<()> {
    remove_existing_file(target)?;
    fs::copy(src, target)?;
    Ok(())
}

/// Remove a non-directory entry at `path` so a copy or symlink can replace it.
fn remove_existing_file(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => {
            fs::remove_file(path)?;
            Ok(())
        }
    }
}
