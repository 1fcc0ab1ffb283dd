//! Manifest discovery under workspace package patterns
//!
//! Expands the workspace's glob-style location patterns into the set of
//! `package.json` paths, then reads the manifests concurrently. Nothing
//! under a `node_modules` directory is ever picked up.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use walkdir::WalkDir;

use crate::config::defaults::{MANIFEST_FILE, NODE_MODULES_DIR};
use crate::core::manifest::PackageManifest;
use crate::error::{DiscoveryError, ManifestError};

/// Directory a pattern scans: the pattern with its final segment dropped
///
/// `packages/*` scans `packages/`, `tools/cli` scans `tools/`, and a
/// single-segment pattern scans the workspace root itself.
fn pattern_base(root: &Path, pattern: &str) -> PathBuf {
    match pattern.rsplit_once('/') {
        Some((parent, _)) => root.join(parent),
        None => root.to_path_buf(),
    }
}

/// Find every package manifest below the workspace patterns
///
/// Results are deterministic (file-name sorted walk, patterns in workspace
/// order) and de-duplicated across overlapping patterns, keeping the
/// first-seen position. A pattern whose base directory does not exist
/// contributes nothing.
pub fn discover_manifests(
    root: &Path,
    patterns: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut manifests = Vec::new();

    for pattern in patterns {
        let base = pattern_base(root, pattern);
        if !base.is_dir() {
            tracing::debug!("Pattern '{pattern}' has no directory at {}", base.display());
            continue;
        }

        let walker = WalkDir::new(&base)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != NODE_MODULES_DIR);

        for entry in walker {
            let entry = entry.map_err(|e| DiscoveryError::WalkFailed {
                path: base.clone(),
                error: e.to_string(),
            })?;
            if entry.file_type().is_file()
                && entry.file_name() == MANIFEST_FILE
                && seen.insert(entry.path().to_path_buf())
            {
                manifests.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(manifests)
}

async fn read_manifest(path: PathBuf) -> Result<PackageManifest, ManifestError> {
    let content =
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ManifestError::ReadFailed {
                path: path.clone(),
                error: e.to_string(),
            })?;
    PackageManifest::from_json_validated(&content, &path)
}

/// Read all discovered manifests, concurrently
///
/// The reads are scattered and gathered back in discovery order, so the
/// result order (and therefore the graph construction order) stays
/// deterministic.
pub async fn load_manifests(paths: &[PathBuf]) -> Result<Vec<PackageManifest>, ManifestError> {
    try_join_all(paths.iter().cloned().map(read_manifest)).await
}
