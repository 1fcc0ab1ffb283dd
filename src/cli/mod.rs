//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Topobuild - Dependency-aware build runner for pnpm workspaces
///
/// Builds every package in a pnpm monorepo in local dependency order.
#[derive(Parser, Debug)]
#[command(name = "topobuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(cmd) => cmd.run().await,
            // Bare `topobuild` behaves like `topobuild build`
            None => Commands::default_build().run().await,
        }
    }
}
