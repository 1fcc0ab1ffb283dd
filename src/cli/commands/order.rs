//! Order command implementation
//!
//! Implements `topobuild order`: print the packages a build run would
//! execute, one per line, without running anything. Output is plain so
//! it can be piped into other tools.

use anyhow::Result;
use std::path::Path;

use crate::core::builder::{BuildPipeline, RunConfig};
use crate::core::ignore::IgnoreSet;
use crate::core::manifest::PackageManifest;
use crate::core::workspace::WorkspaceConfig;
use crate::infra::discovery::{discover_manifests, load_manifests};

/// Execute the order command
pub async fn execute(workspace_root: &Path) -> Result<()> {
    let config = WorkspaceConfig::load(workspace_root)?;
    let paths = discover_manifests(workspace_root, &config.packages)?;
    let manifests = load_manifests(&paths).await?;
    let sets: Vec<_> = manifests
        .iter()
        .map(PackageManifest::local_dependencies)
        .collect();

    let mut pipeline = BuildPipeline::new(RunConfig {
        skip_execution: true,
        verbose: false,
    });
    pipeline.build_graph(&sets);
    pipeline.compute_order()?;
    pipeline.apply_filters(&IgnoreSet::load(workspace_root));

    for name in pipeline.build_list() {
        println!("{name}");
    }

    Ok(())
}
