//! Default values for labkit workspace layout and dependency groups.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication. Everything here is a
//! fixed identifier consumed by external tools; labkit never inspects the
//! package names beyond passing them to `uv add`.

/// Remote repository the default workflow clones from.
///
/// Overridable per invocation with `--remote` or the `LABKIT_REMOTE`
/// environment variable.
pub const DEFAULT_REMOTE_URL: &str =
    "https://github.com/labkit-dev/enterprise-data-report.git";

/// Relative path of the Python source tree inside the project root.
pub const SOURCE_DIR: &str = "src/py";

/// Fixed name of the temporary directory used during clone-and-overlay.
pub const CLONE_TMP_DIR: &str = ".labkit-clone";

/// Activation-hook file written inside the source directory, sourced by
/// direnv on directory entry.
pub const ACTIVATION_HOOK_FILE: &str = ".envrc";

/// Fixed contents of the activation-hook file.
pub const ACTIVATION_COMMAND: &str = "source .venv/bin/activate\n";

/// Project manifest consumed and mutated by `uv`.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Resolved, pinned dependency snapshot kept consistent with the manifest.
pub const LOCK_FILE: &str = "uv.lock";

/// Virtual-environment directory created by `uv sync`.
pub const VENV_DIR: &str = ".venv";

/// Interpreter version pin written by `uv init`.
pub const VERSION_PIN_FILE: &str = ".python-version";

/// Entry-point file generated by `uv init`.
pub const ENTRY_POINT_FILE: &str = "main.py";

/// direnv cache directory at the project root.
pub const DIRENV_CACHE_DIR: &str = ".direnv";

/// A named group of packages added to the manifest in one `uv add` call.
#[derive(Debug, Clone, Copy)]
pub struct DependencyGroup {
    /// Human-readable group name, used only for progress output.
    pub name: &'static str,
    /// Package identifiers handed to the environment tool verbatim.
    pub packages: &'static [&'static str],
    /// Whether the group is added as development dependencies.
    pub dev: bool,
}

/// The four fixed dependency groups, installed in this order.
pub const DEPENDENCY_GROUPS: [DependencyGroup; 4] = [
    DependencyGroup {
        name: "base development",
        packages: &["ruff", "pytest", "ipykernel"],
        dev: true,
    },
    DependencyGroup {
        name: "data handling",
        packages: &["polars", "pandas", "numpy", "pydantic"],
        dev: false,
    },
    DependencyGroup {
        name: "file I/O",
        packages: &["pyarrow", "fastexcel", "openpyxl", "pyyaml"],
        dev: false,
    },
    DependencyGroup {
        name: "exploratory analysis",
        packages: &["streamlit", "pygwalker", "matplotlib"],
        dev: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_four_dependency_groups() {
        assert_eq!(DEPENDENCY_GROUPS.len(), 4);
    }

    #[test]
    fn test_dependency_groups_are_non_empty() {
        for group in DEPENDENCY_GROUPS {
            assert!(!group.packages.is_empty(), "empty group: {}", group.name);
        }
    }

    #[test]
    fn test_only_first_group_is_dev() {
        assert!(DEPENDENCY_GROUPS[0].dev);
        for group in &DEPENDENCY_GROUPS[1..] {
            assert!(!group.dev, "unexpected dev group: {}", group.name);
        }
    }

    #[test]
    fn test_activation_command_targets_venv() {
        assert!(ACTIVATION_COMMAND.contains(VENV_DIR));
        assert!(ACTIVATION_COMMAND.ends_with('\n'));
    }
}
