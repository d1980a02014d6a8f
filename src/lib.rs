//! # labkit Library
//!
//! Core functionality for bootstrapping a data-science working environment:
//! cloning the project repository, provisioning a Python virtual environment
//! through `uv`, installing a fixed set of data-analysis dependency groups,
//! and reset/purge utilities. Every operation is typed, checked orchestration
//! over external subprocesses; labkit contains no dependency resolution,
//! virtual-environment mechanics, or data processing of its own.
//!
//! ## Core Concepts
//!
//! - **Workspace (`config`)**: the explicit context value threaded through
//!   every operation, carrying the project root, remote URL, and derived
//!   paths of all generated files. No operation relies on the ambient
//!   current directory.
//! - **Workflows (`bootstrap`)**: the orchestration sequences (clone and
//!   overlay, initialize, install, synchronize, reset, purge), each a
//!   fail-fast chain of checked steps.
//! - **Tool wrappers (`git`, `uv`)**: thin subprocess wrappers that surface
//!   the external tool's own diagnostics inside typed errors.
//! - **Overlay (`overlay`)**: the working-tree merge used by the cloner,
//!   plus best-effort path removal used by the reset workflow.
//!
//! ## Quick Example
//!
//! ```no_run
//! use labkit::bootstrap;
//! use labkit::config::Workspace;
//!
//! let workspace = Workspace::new("/path/to/project");
//! bootstrap::clone_overlay(&workspace)?;
//! bootstrap::synchronize(&workspace)?;
//! # Ok::<(), labkit::error::Error>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod overlay;
pub mod uv;
