//! # Devpack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Devpack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! devpack --help
//!
//! # Install the app's development dependencies, then run it
//! devpack install
//! devpack -v dev
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Log and display any error, exiting with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (dev, install)
mod common; // Shared utilities (fs, process, python tooling)
mod core; // Core contract (config, errors, options, dev orchestration)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "devpack",
    about = "Devpack: run packaged applications in development mode",
    long_about = "Runs an application project straight from its sources, with its\n\
                  development dependencies installed and its environment composed.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(clap::Subcommand, Debug)]
enum Commands {
    #[command(alias = "d")]
    Dev(commands::dev::DevArgs),
    #[command(alias = "i")]
    Install(commands::install::InstallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Dev(args) => commands::dev::handle_dev(args).await,
        Commands::Install(args) => commands::install::handle_install(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
