//! # Devpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers used by the commands, kept apart from the command logic
//! (`commands::`) and the core contract (`core::`):
//!
//! - **`fs`**: Filesystem I/O (directory creation, reading and writing files).
//! - **`process`**: Running child processes with inherited stdio.
//! - **`python`**: The Python implementations of the dev run capabilities.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for executing external processes.
pub mod process;
/// Environment provider, pip installer and runpy launcher for Python apps.
pub mod python;
