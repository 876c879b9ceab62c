//! # Devpack Dev Command
//!
//! File: cli/src/commands/dev.rs
//!
//! ## Overview
//!
//! This module implements `devpack dev`, which runs an application straight
//! from its source tree. It loads the project, selects the app, turns the
//! command-line flags into an `Options` map and hands everything to a
//! `DevOrchestrator` wired with the Python capabilities.
//!
//! ## Examples
//!
//! ```bash
//! # Run the project's only app
//! devpack dev
//!
//! # Refresh dependencies first, then run `second` with an extra variable
//! devpack dev -a second -d -e APP_MODE=debug
//!
//! # Only update dependencies, do not start the app
//! devpack dev -d --no-run
//!
//! # Pass arguments through to the app
//! devpack dev -- --port 8080
//! ```
//!
//! Values given with `-o KEY=VALUE` are parsed as TOML literals when possible
//! (`-o upgrade=false`), otherwise kept as strings.
//!
use crate::{
    common::python::{PipInstaller, RunpyLauncher, SourceEnvironment},
    core::{
        config::{self, Project},
        dev::DevOrchestrator,
        error::Result,
        options::{self, Options},
    },
};
use anyhow::Context;
use clap::Parser;
use toml::Value;
use tracing::{debug, info};

/// # Dev Arguments (`DevArgs`)
///
/// Command-line arguments accepted by `devpack dev`.
#[derive(Parser, Debug)]
#[command(
    about = "Run an application in development mode",
    long_about = "Runs an application directly from its sources, optionally updating its development dependencies first."
)]
pub struct DevArgs {
    /// Name of the app to run. Optional when the project defines a single app.
    #[arg(short, long)]
    pub app: Option<String>,

    /// Update the app's development dependencies before running it.
    #[arg(short = 'd', long)]
    pub update_dependencies: bool,

    /// Stop after the dependency update; do not start the app.
    #[arg(long)]
    pub no_run: bool,

    /// Environment override for the app (repeatable), e.g. `-e APP_MODE=debug`.
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Extra option for the installer and launcher (repeatable), e.g. `-o upgrade=false`.
    #[arg(short, long = "option", value_name = "KEY=VALUE")]
    pub option: Vec<String>,

    /// Arguments passed through to the app, after `--`.
    #[arg(last = true)]
    pub passthrough: Vec<String>,
}

/// # Handle Dev Command (`handle_dev`)
///
/// Loads the project and performs the dev run on tokio's blocking pool,
/// since dependency installation and the app itself are blocking child processes.
pub async fn handle_dev(args: DevArgs) -> Result<()> {
    info!("Handling dev command...");
    debug!("Dev args: {:?}", args);

    let project = config::load_project().context("Failed to load Devpack configuration")?;
    let options = build_options(&args)?;

    tokio::task::spawn_blocking(move || run(&project, &args, options))
        .await
        .context("Dev run task failed to complete")?
}

fn run(project: &Project, args: &DevArgs, options: Options) -> Result<()> {
    let app = project.app(args.app.as_deref())?;

    let provider = SourceEnvironment::new(&project.root, project.tool.env.clone());
    let installer = PipInstaller::new(&project.tool.python, &project.root);
    let launcher = RunpyLauncher::new(&project.tool.python, &project.root);
    let mut orchestrator = DevOrchestrator::new(&project.root, &provider, &installer, &launcher);

    if args.no_run {
        orchestrator.prepare(app, args.update_dependencies, &options)?;
        info!("Skipping launch of '{}' (--no-run)", app.app_name);
        return Ok(());
    }

    let record = orchestrator.run_dev(app, args.update_dependencies, options)?;
    debug!("Invocation record for '{}': {:?}", app.app_name, record);
    if !orchestrator.environment().is_empty() {
        debug!(
            "Accumulated environment overrides: {:?}",
            orchestrator.environment().vars()
        );
    }
    Ok(())
}

/// Converts the command-line flags into the option map for the orchestrator.
pub fn build_options(args: &DevArgs) -> Result<Options> {
    let mut options = parse_option_flags(&args.option)?;

    if !args.env.is_empty() {
        let mut env = Options::new();
        for raw in &args.env {
            let (key, value) = options::split_key_value(raw)?;
            env.insert(key, Value::String(value));
        }
        options.insert(options::ENV_KEY.to_string(), Value::Table(env));
    }
    if !args.passthrough.is_empty() {
        options.insert(
            options::PASSTHROUGH_KEY.to_string(),
            Value::Array(args.passthrough.iter().cloned().map(Value::String).collect()),
        );
    }
    Ok(options)
}

/// Parses repeated `-o KEY=VALUE` flags.
pub fn parse_option_flags(raw_options: &[String]) -> Result<Options> {
    let mut options = Options::new();
    for raw in raw_options {
        let (key, value) = options::split_key_value(raw)?;
        options.insert(key, options::parse_option_value(&value));
    }
    Ok(options)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_args_parsing() {
        let args = DevArgs::try_parse_from([
            "dev", "-a", "second", "-d", "-e", "APP_MODE=debug", "-o", "upgrade=false", "--",
            "--port", "8080",
        ])
        .unwrap();

        assert_eq!(args.app.as_deref(), Some("second"));
        assert!(args.update_dependencies);
        assert!(!args.no_run);
        assert_eq!(args.env, vec!["APP_MODE=debug"]);
        assert_eq!(args.option, vec!["upgrade=false"]);
        assert_eq!(args.passthrough, vec!["--port", "8080"]);
    }

    #[test]
    fn test_dev_args_defaults() {
        let args = DevArgs::try_parse_from(["dev"]).unwrap();
        assert!(args.app.is_none());
        assert!(!args.update_dependencies);
        assert!(args.env.is_empty());
        assert!(args.passthrough.is_empty());
    }

    #[test]
    fn test_build_options() {
        let args = DevArgs::try_parse_from([
            "dev", "-e", "A=1", "-e", "B=two", "-o", "upgrade=false", "-o", "label=nightly",
            "--", "serve",
        ])
        .unwrap();

        let options = build_options(&args).unwrap();

        let env = options["env"].as_table().unwrap();
        // Environment values stay strings, even when they look like numbers.
        assert_eq!(env["A"], Value::from("1"));
        assert_eq!(env["B"], Value::from("two"));
        assert_eq!(options["upgrade"], Value::Boolean(false));
        assert_eq!(options["label"], Value::from("nightly"));
        assert_eq!(
            options["passthrough"],
            Value::Array(vec![Value::from("serve")])
        );
    }

    #[test]
    fn test_build_options_empty() {
        let args = DevArgs::try_parse_from(["dev"]).unwrap();
        assert!(build_options(&args).unwrap().is_empty());
    }

    #[test]
    fn test_build_options_rejects_malformed_env() {
        let args = DevArgs::try_parse_from(["dev", "-e", "NOEQUALS"]).unwrap();
        assert!(build_options(&args).is_err());
    }
}
