//! # Devpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Devpack CLI and makes
//! them available to the entry point (`main.rs`). Each command defines its
//! own arguments struct and an async handler.
//!
//! ## Commands
//!
//! - `dev`: Run an application from its sources, optionally updating dependencies first
//! - `install`: Install development dependencies and write the dist-info marker
//!

/// `devpack dev`: run an app in development mode.
pub mod dev;
/// `devpack install`: bootstrap an app's development dependencies.
pub mod install;
