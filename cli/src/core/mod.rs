//! # Devpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core components of Devpack:
//! - `app`: Application descriptors and the installed-state check
//! - `config`: Configuration loading, merging and validation
//! - `dev`: The dev run orchestrator and its capability traits
//! - `error`: Error types and the crate-wide `Result`
//! - `options`: The open option map and its merge rules
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading the project
//! use crate::core::dev::DevOrchestrator; // For running an app in dev mode
//! use crate::core::error::{DevpackError, Result}; // For error handling
//! ```
//!
pub mod app;
pub mod config;
pub mod dev;
pub mod error;
pub mod options;
