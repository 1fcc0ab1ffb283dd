//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod order;
pub mod tree;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every workspace package in dependency order
    Build {
        /// Compute and print the order without building
        #[arg(long)]
        dry_run: bool,

        /// Fail when a local dependency is not a workspace package
        #[arg(long)]
        strict: bool,

        /// Build command template; PACKAGE is replaced with each package name
        #[arg(long, value_name = "TEMPLATE")]
        command: Option<String>,
    },

    /// Print the dependency-first build order, one package per line
    Order,

    /// Display the workspace dependency tree
    Tree {
        /// Show dependencies for a specific package
        package: Option<String>,

        /// Output in DOT graph format
        #[arg(long)]
        graph: bool,
    },

    /// Validate the workspace without building
    Check,
}

impl Commands {
    /// The command that runs when no subcommand is given
    pub fn default_build() -> Self {
        Self::Build {
            dry_run: false,
            strict: false,
            command: None,
        }
    }

    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build {
                dry_run,
                strict,
                command,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = build::BuildOptions {
                    dry_run,
                    strict,
                    command,
                };
                build::execute(&current_dir, options).await
            }
            Self::Order => {
                let current_dir = std::env::current_dir()?;
                order::execute(&current_dir).await
            }
            Self::Tree { package, graph } => {
                let current_dir = std::env::current_dir()?;
                tree::execute(&current_dir, package, graph).await
            }
            Self::Check => {
                let current_dir = std::env::current_dir()?;
                check::execute(&current_dir).await
            }
        }
    }
}
