//! Package manifest (package.json) parsing and local-dependency filtering
//!
//! Each discovered package contributes one manifest: its name plus a raw
//! dependency map. Only entries whose version specifier uses the
//! `workspace:` protocol reference another in-workspace package; everything
//! else resolves from a registry and is irrelevant to build ordering.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::defaults::WORKSPACE_PROTOCOL;
use crate::error::ManifestError;

/// A package manifest (package.json), reduced to what ordering needs
///
/// Unknown fields (version, scripts, devDependencies, ...) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PackageManifest {
    /// Package name
    pub name: String,

    /// Raw dependency map: dependency name -> version specifier.
    /// `None` when the manifest has no dependency map at all.
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,
}

/// A package's in-workspace dependencies, in deterministic (sorted) order
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDependencySet {
    /// Package name
    pub name: String,
    /// Names of dependencies resolved within the workspace
    pub deps: Vec<String>,
}

impl PackageManifest {
    /// Parse a manifest from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse and validate a manifest, attributing errors to its path
    pub fn from_json_validated(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let manifest = Self::from_json(content).map_err(|e| ManifestError::ParseFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if manifest.name.trim().is_empty() {
            return Err(ManifestError::EmptyName {
                path: path.to_path_buf(),
            });
        }
        Ok(manifest)
    }

    /// Load and validate a manifest from a file path
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_json_validated(&content, path)
    }

    /// Reduce the dependency map to in-workspace entries
    ///
    /// Keeps only dependencies whose specifier starts with the workspace
    /// protocol. A manifest without a dependency map yields an empty set.
    pub fn local_dependencies(&self) -> LocalDependencySet {
        let deps = self
            .dependencies
            .iter()
            .flatten()
            .filter(|(_, specifier)| specifier.starts_with(WORKSPACE_PROTOCOL))
            .map(|(name, _)| name.clone())
            .collect();

        LocalDependencySet {
            name: self.name.clone(),
            deps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    // ============================================
    // Unit Tests
    // ============================================

    #[test]
    fn test_manifest_parses_name_and_dependencies() {
        let json = r#"{
            "name": "@acme/api",
            "version": "1.4.0",
            "scripts": { "build": "tsc" },
            "dependencies": {
                "@acme/core": "workspace:*",
                "express": "^4.18.0"
            },
            "devDependencies": { "typescript": "^5.0.0" }
        }"#;

        let manifest = PackageManifest::from_json(json).expect("Failed to parse manifest");
        assert_eq!(manifest.name, "@acme/api");
        let deps = manifest.dependencies.as_ref().unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps["@acme/core"], "workspace:*");
    }

    #[test]
    fn test_manifest_without_dependency_map() {
        let json = r#"{ "name": "standalone" }"#;
        let manifest = PackageManifest::from_json(json).unwrap();
        assert!(manifest.dependencies.is_none());
        assert_eq!(manifest.local_dependencies().deps, Vec::<String>::new());
    }

    #[test]
    fn test_manifest_missing_name_is_an_error() {
        let json = r#"{ "dependencies": {} }"#;
        assert!(PackageManifest::from_json(json).is_err());
    }

    #[test]
    fn test_local_filter_keeps_only_workspace_protocol() {
        let json = r#"{
            "name": "@acme/web",
            "dependencies": {
                "@acme/core": "workspace:*",
                "@acme/ui": "workspace:^",
                "@acme/utils": "workspace:~1.2.0",
                "react": "^18.2.0",
                "local-tarball": "file:../vendor/local.tgz",
                "linked": "link:../linked"
            }
        }"#;

        let set = PackageManifest::from_json(json).unwrap().local_dependencies();
        assert_eq!(set.name, "@acme/web");
        assert_eq!(set.deps, vec!["@acme/core", "@acme/ui", "@acme/utils"]);
    }

    #[test]
    fn test_local_filter_empty_dependency_map() {
        let json = r#"{ "name": "leaf", "dependencies": {} }"#;
        let set = PackageManifest::from_json(json).unwrap().local_dependencies();
        assert!(set.deps.is_empty());
    }

    #[test]
    fn test_load_reads_manifest_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{ "name": "on-disk", "dependencies": { "dep": "workspace:*" } }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name, "on-disk");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = PackageManifest::load(&temp_dir.path().join("package.json"));
        assert!(matches!(result, Err(ManifestError::ReadFailed { .. })));
    }

    #[test]
    fn test_load_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "  " }"#).unwrap();
        let result = PackageManifest::load(&path);
        assert!(matches!(result, Err(ManifestError::EmptyName { .. })));
    }

    // ============================================
    // Property-Based Tests
    // ============================================

    /// Strategy for generating valid package names
    fn package_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}"
    }

    /// Strategy for a dependency specifier, local or registry
    fn specifier_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("workspace:*".to_string()),
            Just("workspace:^".to_string()),
            "workspace:~[0-9]\\.[0-9]\\.[0-9]",
            "\\^[0-9]\\.[0-9]\\.[0-9]",
            "~[0-9]\\.[0-9]\\.[0-9]",
            Just("file:../elsewhere".to_string()),
        ]
    }

    proptest! {
        /// Local filtering keeps exactly the workspace-protocol entries.
        #[test]
        fn prop_local_filter_matches_protocol_prefix(
            name in package_name_strategy(),
            deps in prop::collection::btree_map(package_name_strategy(), specifier_strategy(), 0..8),
        ) {
            let manifest = PackageManifest {
                name,
                dependencies: Some(deps.clone()),
            };

            let set = manifest.local_dependencies();
            let expected: Vec<String> = deps
                .iter()
                .filter(|(_, spec)| spec.starts_with("workspace:"))
                .map(|(dep, _)| dep.clone())
                .collect();

            prop_assert_eq!(set.deps, expected);
        }

        /// The filtered set is always sorted, regardless of input.
        #[test]
        fn prop_local_deps_are_sorted(
            deps in prop::collection::btree_map(package_name_strategy(), Just("workspace:*".to_string()), 0..8),
        ) {
            let manifest = PackageManifest {
                name: "pkg".to_string(),
                dependencies: Some(deps),
            };

            let set = manifest.local_dependencies();
            let mut sorted = set.deps.clone();
            sorted.sort();
            prop_assert_eq!(set.deps, sorted);
        }
    }
}
