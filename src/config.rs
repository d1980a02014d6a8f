//! # Workspace Context
//!
//! The explicit configuration value threaded through every operation: the
//! project root, the remote repository URL, and the derived paths of all
//! generated files. No operation relies on the ambient current directory;
//! subprocesses receive explicit working directories and filesystem paths
//! are always absolute-from-root.

use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// All the context an operation needs: where the project lives, where the
/// Python source tree lives inside it, and which remote to clone from.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    remote_url: String,
}

impl Workspace {
    /// Create a workspace rooted at `root` with the default remote.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            remote_url: defaults::DEFAULT_REMOTE_URL.to_string(),
        }
    }

    /// Replace the remote repository URL.
    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    /// Build a workspace from optional CLI overrides, falling back to the
    /// `LABKIT_ROOT`/`LABKIT_REMOTE` environment variables, the current
    /// directory, and the default remote.
    ///
    /// The environment fallback matters for the default clone-then-sync
    /// workflow, which constructs its argument sets directly rather than
    /// through clap.
    pub fn resolve(root: Option<PathBuf>, remote: Option<String>) -> Result<Self> {
        let root = root.or_else(|| std::env::var_os("LABKIT_ROOT").map(PathBuf::from));
        let remote = remote.or_else(|| std::env::var("LABKIT_REMOTE").ok());

        let root = match root {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| Error::Path {
                message: format!("cannot determine current directory: {}", e),
            })?,
        };

        let mut workspace = Self::new(root);
        if let Some(url) = remote {
            workspace = workspace.with_remote(url);
        }
        Ok(workspace)
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remote repository URL used by the cloner.
    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// Python source tree (`<root>/src/py`).
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(defaults::SOURCE_DIR)
    }

    /// Temporary directory used by clone-and-overlay (`<root>/.labkit-clone`).
    pub fn clone_dir(&self) -> PathBuf {
        self.root.join(defaults::CLONE_TMP_DIR)
    }

    /// Activation-hook file inside the source tree.
    pub fn activation_hook(&self) -> PathBuf {
        self.source_dir().join(defaults::ACTIVATION_HOOK_FILE)
    }

    /// Project manifest inside the source tree.
    pub fn manifest(&self) -> PathBuf {
        self.source_dir().join(defaults::MANIFEST_FILE)
    }

    /// Lock file inside the source tree.
    pub fn lock_file(&self) -> PathBuf {
        self.source_dir().join(defaults::LOCK_FILE)
    }

    /// Virtual-environment directory inside the source tree.
    pub fn venv_dir(&self) -> PathBuf {
        self.source_dir().join(defaults::VENV_DIR)
    }

    /// Interpreter version-pin file inside the source tree.
    pub fn version_pin(&self) -> PathBuf {
        self.source_dir().join(defaults::VERSION_PIN_FILE)
    }

    /// Generated entry-point file inside the source tree.
    pub fn entry_point(&self) -> PathBuf {
        self.source_dir().join(defaults::ENTRY_POINT_FILE)
    }

    /// direnv cache directory at the project root.
    pub fn direnv_cache(&self) -> PathBuf {
        self.root.join(defaults::DIRENV_CACHE_DIR)
    }

    /// Every generated path the reset workflow deletes, in deletion order.
    ///
    /// The source directory itself and user-authored files are never listed
    /// here; only state that a subsequent sync regenerates.
    pub fn reset_targets(&self) -> Vec<PathBuf> {
        vec![
            self.direnv_cache(),
            self.venv_dir(),
            self.version_pin(),
            self.entry_point(),
            self.manifest(),
            self.lock_file(),
        ]
    }
}
