//! # Devpack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Devpack application.
//! It provides a consistent approach to error management with detailed error
//! information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DevpackError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration and option errors
//! - Filesystem errors
//! - Application selection and installed-state errors
//! - Dependency installation and launch failures
//!
//! ## Examples
//!
//! Pattern matching on a dev run failure:
//!
//! ```rust
//! match orchestrator.run_dev(&app, false, options) {
//!     Ok(record) => println!("{:?}", record),
//!     Err(e) if matches!(e.downcast_ref::<DevpackError>(), Some(DevpackError::AppNotInstalled { .. })) => {
//!         println!("Run `devpack install` first.");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Devpack application.
#[derive(Error, Debug)]
pub enum DevpackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Raised before any dependency installation or launch is attempted.
    #[error("Application '{name}' is not installed: {reason}")]
    AppNotInstalled { name: String, reason: String },

    #[error("Application '{name}' is not defined in this project.")]
    AppNotFound { name: String },

    #[error("Application selection error: {0}")]
    AppSelection(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Failed to install development dependencies for '{name}': {reason}")]
    DependencyInstall { name: String, reason: String },

    #[error("Failed to launch '{name}' in dev mode: {reason}")]
    Launch { name: String, reason: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
