//! # Devpack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: a handle on the
//! compiled `devpack` binary and builders for throwaway project directories.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// # Get Devpack Command (`devpack_cmd`)
///
/// An `assert_cmd::Command` for the `devpack` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn devpack_cmd() -> Command {
    Command::cargo_bin("devpack").expect("Failed to find devpack binary for testing")
}

/// `devpack_cmd` running inside `dir`, with logging quiet unless asked for.
pub fn devpack_in(dir: &Path) -> Command {
    let mut cmd = devpack_cmd();
    cmd.current_dir(dir).env("RUST_LOG", "warn");
    cmd
}

/// Creates a project directory holding `devpack.toml` with the given content.
pub fn project(config: &str) -> TempDir {
    let tmp = tempfile::tempdir().expect("Failed to create temp project");
    fs::write(tmp.path().join("devpack.toml"), config).expect("Failed to write devpack.toml");
    tmp
}

/// Creates `<source>/__init__.py` under `root`.
pub fn write_sources(root: &Path, source: &str) {
    let dir = root.join(source);
    fs::create_dir_all(&dir).expect("Failed to create source dir");
    fs::write(dir.join("__init__.py"), "print(\"Hello world\")").expect("Failed to write __init__.py");
}

/// A single-app project definition using `python` as the interpreter.
pub fn single_app_config(python: &str) -> String {
    format!(
        r#"
[tool]
python = "{python}"

[apps.first]
bundle = "com.example"
version = "0.0.1"
description = "The first simple app"
sources = ["src/first"]
"#
    )
}
