//! Topobuild CLI - Dependency-aware build runner for pnpm workspaces
//!
//! Entry point for the topobuild command-line application.

use anyhow::Result;
use clap::Parser;

use topobuild::cli::output::{display_error, OutputConfig};
use topobuild::cli::Cli;
use topobuild::config::defaults::DEBUG_ENV;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // DEBUG=yes raises the log level the same way -vv does
    let debug_env = std::env::var(DEBUG_ENV).is_ok_and(|v| v == "yes");
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose >= 2 || debug_env {
        tracing::Level::DEBUG
    } else if cli.verbose == 1 {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
