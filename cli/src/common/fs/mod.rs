//! # Devpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Currently a single submodule:
//!
//! - **`io`**: `ensure_dir_exists`, `read_file_to_string` and
//!   `write_string_to_file`, used by the configuration loader and the
//!   dist-info marker writer.
//!
//! Callers import from the submodule directly, e.g.
//! `use crate::common::fs::io::write_string_to_file;`.
//!

/// Basic file I/O operations (e.g., `ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
