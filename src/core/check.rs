//! Workspace health checks
//!
//! Validates the workspace configuration, manifests, and dependency
//! graph, probes for the package manager binary, and reports what a run
//! would build without building anything.

use std::path::Path;

use crate::core::builder::{BuildPipeline, RunConfig};
use crate::core::ignore::IgnoreSet;
use crate::core::manifest::PackageManifest;
use crate::core::workspace::{self, WorkspaceConfig};
use crate::infra::discovery::discover_manifests;

/// Result of the check operation
#[derive(Debug)]
pub struct CheckResult {
    /// Whether the workspace file and lockfile are usable
    pub config_valid: bool,
    /// Whether every discovered manifest parsed
    pub manifests_valid: bool,
    /// Whether every local dependency resolves to a discovered package
    pub dependencies_valid: bool,
    /// Whether a build order exists (no circular dependencies)
    pub order_valid: bool,
    /// Whether the pnpm binary is on PATH
    pub package_manager_available: bool,
    /// Packages a run would build, in order
    pub build_order: Vec<String>,
    /// Discovered packages excluded by the ignore file
    pub ignored: Vec<String>,
    /// Warnings encountered during the check
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// Create a new check result with everything assumed healthy
    pub fn new() -> Self {
        Self {
            config_valid: true,
            manifests_valid: true,
            dependencies_valid: true,
            order_valid: true,
            package_manager_available: true,
            build_order: Vec::new(),
            ignored: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether a build run could proceed
    ///
    /// Unresolvable dependencies and a missing pnpm binary only warn,
    /// matching what a real run does.
    pub fn is_valid(&self) -> bool {
        self.config_valid && self.manifests_valid && self.order_valid
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Inspect a workspace and report whether a build run could proceed
pub fn check(root: &Path) -> CheckResult {
    let mut result = CheckResult::new();

    let config = match WorkspaceConfig::load(root) {
        Ok(config) => config,
        Err(e) => {
            result.config_valid = false;
            result.warnings.push(e.to_string());
            return result;
        }
    };

    if config.packages.is_empty() {
        result
            .warnings
            .push("workspace declares no package patterns".to_string());
    }

    if let Err(e) = workspace::require_pnpm(root) {
        result.config_valid = false;
        result.warnings.push(e.to_string());
    }

    result.package_manager_available = which::which("pnpm").is_ok();
    if !result.package_manager_available {
        result.warnings.push("pnpm not found in PATH".to_string());
    }

    let paths = match discover_manifests(root, &config.packages) {
        Ok(paths) => paths,
        Err(e) => {
            result.config_valid = false;
            result.warnings.push(e.to_string());
            return result;
        }
    };

    let mut sets = Vec::new();
    for path in &paths {
        match PackageManifest::load(path) {
            Ok(manifest) => sets.push(manifest.local_dependencies()),
            Err(e) => {
                result.manifests_valid = false;
                result.warnings.push(e.to_string());
            }
        }
    }

    let mut pipeline = BuildPipeline::new(RunConfig {
        skip_execution: true,
        verbose: false,
    });
    pipeline.build_graph(&sets);

    for (dependent, missing) in pipeline.missing_dependencies() {
        result.dependencies_valid = false;
        result.warnings.push(format!(
            "'{dependent}' depends on '{missing}', which is not a workspace package"
        ));
    }

    if let Err(e) = pipeline.compute_order() {
        result.order_valid = false;
        result.warnings.push(format!("cannot order packages: {e}"));
        return result;
    }

    let ignore = IgnoreSet::load(root);
    result.ignored = pipeline
        .order()
        .iter()
        .filter(|name| ignore.contains(name) && pipeline.graph().contains(name))
        .cloned()
        .collect();

    pipeline.apply_filters(&ignore);
    result.build_order = pipeline.build_list().to_vec();

    result
}
