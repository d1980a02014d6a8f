//! # Error Handling
//!
//! Centralized error type for labkit. Every failure mode is "an external
//! command failed" or "a filesystem operation failed", so the enum stays
//! small: each variant carries the command (or paths) involved plus the
//! diagnostic text the underlying tool produced. labkit adds context to
//! errors, it never replaces the tool's own output.
//!
//! The `Result<T>` alias is used throughout the library; the binary layer
//! converts into `anyhow::Error` at the command boundary.

use thiserror::Error;

/// Main error type for labkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while cloning the project repository.
    ///
    /// Includes the repository URL, the error message, and an optional hint
    /// for resolution.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command.
    #[error("Git command failed: {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// An error occurred while executing the environment/dependency tool.
    #[error("Environment tool command failed: {command} - {stderr}")]
    EnvTool { command: String, stderr: String },

    /// An error occurred while overlaying cloned contents onto the working tree.
    #[error("Overlay merge error: {src} -> {dst}: {message}")]
    Overlay {
        src: String,
        dst: String,
        message: String,
    },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
