//! # Devpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` that add context to I/O errors:
//! - **`ensure_dir_exists`**: `mkdir -p`, rejecting paths that exist as files.
//! - **`read_file_to_string`**: reads a whole file (used for `devpack.toml`).
//! - **`write_string_to_file`**: writes a file, creating its parent first
//!   (used for the dist-info marker files).
//!
use crate::core::error::{DevpackError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at `path`, creating it and its parents if needed.
///
/// # Errors
///
/// Returns `DevpackError::FileSystem` if `path` exists but is not a directory,
/// or an I/O error with context if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DevpackError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, replacing any existing file.
///
/// The parent directory is created first if it is missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote file: {:?}", path);
    Ok(())
}
