//! # Devpack Install Command
//!
//! File: cli/src/commands/install.rs
//!
//! ## Overview
//!
//! This module implements `devpack install`, which installs an app's
//! development requirements and writes its `<app_name>.dist-info` marker.
//! A fresh checkout has no marker, so `devpack dev` refuses to run it
//! until this command has been run once.
//!
//! ## Examples
//!
//! ```bash
//! devpack install
//! devpack install -a second -o index_url=https://example.com/simple
//! ```
//!
use crate::{
    commands::dev::parse_option_flags,
    common::python::{PipInstaller, RunpyLauncher, SourceEnvironment},
    core::{config, dev::DevOrchestrator, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Arguments for `devpack install`.
#[derive(Parser, Debug)]
#[command(about = "Install an app's development dependencies and mark it installed")]
pub struct InstallArgs {
    /// Name of the app to install. Optional when the project defines a single app.
    #[arg(short, long)]
    pub app: Option<String>,

    /// Extra installer option (repeatable), e.g. `-o upgrade=false`.
    #[arg(short, long = "option", value_name = "KEY=VALUE")]
    pub option: Vec<String>,
}

/// Handler for `devpack install`.
pub async fn handle_install(args: InstallArgs) -> Result<()> {
    info!("Handling install command...");
    debug!("Install args: {:?}", args);

    let project = config::load_project().context("Failed to load Devpack configuration")?;
    let options = parse_option_flags(&args.option)?;

    tokio::task::spawn_blocking(move || -> Result<()> {
        let app = project.app(args.app.as_deref())?;
        let provider = SourceEnvironment::new(&project.root, project.tool.env.clone());
        let installer = PipInstaller::new(&project.tool.python, &project.root);
        let launcher = RunpyLauncher::new(&project.tool.python, &project.root);
        let orchestrator = DevOrchestrator::new(&project.root, &provider, &installer, &launcher);

        orchestrator.install(app, &options)?;
        println!("'{}' is ready for `devpack dev`.", app.app_name);
        Ok(())
    })
    .await
    .context("Install task failed to complete")?
}
