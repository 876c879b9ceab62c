//! # Devpack Python Tooling (`common::python`)
//!
//! File: cli/src/common/python/mod.rs
//!
//! ## Overview
//!
//! Real implementations of the dev run capabilities for Python projects:
//!
//! - **`environment`**: `SourceEnvironment`, the environment provider. Puts
//!   every source's parent directory on `PYTHONPATH`.
//! - **`pip`**: `PipInstaller`, installs an app's `requires` with
//!   `python -m pip install` and refreshes its dist-info marker.
//! - **`launch`**: `RunpyLauncher`, starts the app module through `runpy`.
//! - **`dist_info`**: writes the `<app_name>.dist-info` marker directory.
//!
//! All of them are plain synchronous structs; the `dev` command wires them
//! into a `core::dev::DevOrchestrator`.
//!

pub mod dist_info;
pub mod environment;
pub mod launch;
pub mod pip;

pub use environment::SourceEnvironment;
pub use launch::RunpyLauncher;
pub use pip::PipInstaller;
