//! Build command implementation
//!
//! Implements `topobuild build`: discover workspace packages, order them
//! by local dependencies, and run each package's build command in
//! sequence.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{self, status, OutputConfig};
use crate::config::defaults::{DEBUG_ENV, DEFAULT_BUILD_COMMAND, SKIP_BUILD_ENV};
use crate::core::builder::{BuildPipeline, RunConfig};
use crate::core::ignore::IgnoreSet;
use crate::core::manifest::PackageManifest;
use crate::core::workspace::{self, WorkspaceConfig};
use crate::error::ConfigError;
use crate::infra::discovery::{discover_manifests, load_manifests};
use crate::infra::process::CommandRunner;

/// Build options
pub struct BuildOptions {
    /// Compute and print the order without building
    pub dry_run: bool,
    /// Fail when a local dependency is not a workspace package
    pub strict: bool,
    /// Build command template overriding the default
    pub command: Option<String>,
}

/// Execute the build command
pub async fn execute(workspace_root: &Path, options: BuildOptions) -> Result<()> {
    let manager = workspace::require_pnpm(workspace_root)?;
    tracing::debug!("package manager: {manager}");

    let config = WorkspaceConfig::load(workspace_root)?;
    tracing::info!("workspace patterns: {:?}", config.packages);

    let spinner = output::create_spinner("Scanning workspace packages...");
    let paths = discover_manifests(workspace_root, &config.packages)?;
    let manifests = load_manifests(&paths).await?;
    spinner.finish_and_clear();

    let sets: Vec<_> = manifests
        .iter()
        .map(PackageManifest::local_dependencies)
        .collect();

    let run_config = RunConfig {
        skip_execution: options.dry_run || env_flag(SKIP_BUILD_ENV),
        verbose: OutputConfig::global().verbose > 0 || env_flag(DEBUG_ENV),
    };
    let mut pipeline = BuildPipeline::new(run_config);
    pipeline.build_graph(&sets);

    let missing = pipeline.missing_dependencies();
    if !missing.is_empty() {
        if options.strict {
            return Err(ConfigError::MissingPackages { missing }.into());
        }
        for (dependent, dep) in &missing {
            tracing::warn!("'{dependent}' depends on '{dep}', which is not a workspace package");
        }
    }

    pipeline.compute_order()?;

    let ignore = IgnoreSet::load(workspace_root);
    if !ignore.is_empty() {
        tracing::info!("ignore file excludes {} package name(s)", ignore.len());
    }
    pipeline.apply_filters(&ignore);

    if pipeline.build_list().is_empty() {
        output::emit("Nothing to build");
        return Ok(());
    }

    output::emit("About to build the following packages:");
    for name in pipeline.build_list() {
        output::emit(format!("  • {name}"));
    }

    let template = options.command.as_deref().unwrap_or(DEFAULT_BUILD_COMMAND);
    let runner = CommandRunner::new();
    let report = pipeline.execute(&runner, template).await?;

    if report.skipped_execution {
        output::emit(format!(
            "{} Dry run - no build commands were executed",
            status::INFO
        ));
    } else {
        output::emit(format!(
            "{} Built {} package(s)",
            status::SUCCESS,
            report.built.len()
        ));
    }

    Ok(())
}

/// Whether an environment toggle is set to its activating value
fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "yes")
}
