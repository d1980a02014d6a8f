//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `labkit` command-line tool. Each subcommand is defined in its own file
//! to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command and is
//! responsible for resolving the workspace context and calling into the
//! `labkit` library to perform the core logic.

pub mod clone;
pub mod completions;
pub mod init;
pub mod install;
pub mod purge;
pub mod reset;
pub mod sync;
