//! Workspace descriptor (pnpm-workspace.yaml) and package-manager detection
//!
//! The workspace file supplies the glob-style package location patterns.
//! The package manager is identified by which lockfile sits in the
//! workspace root; only pnpm workspaces are supported.

use std::path::Path;

use serde::Deserialize;

use crate::config::defaults::WORKSPACE_FILE;
use crate::error::ConfigError;

/// The workspace descriptor (pnpm-workspace.yaml)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorkspaceConfig {
    /// Glob-style package location patterns, in file order
    #[serde(default)]
    pub packages: Vec<String>,
}

impl WorkspaceConfig {
    /// Load the workspace descriptor from the workspace root
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(WORKSPACE_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::WorkspaceNotFound { path: path.clone() })?;
        Self::from_yaml(&content).map_err(|e| ConfigError::WorkspaceParse {
            path,
            error: e.to_string(),
        })
    }

    /// Parse the workspace descriptor from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// Package manager identified by its lockfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// pnpm (pnpm-lock.yaml)
    Pnpm,
    /// yarn (yarn.lock)
    Yarn,
    /// npm (package-lock.json)
    Npm,
}

impl PackageManager {
    /// All known package managers, in probe order
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Npm,
    ];

    /// Lockfile name for this package manager
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// Detect the package manager from lockfiles in the workspace root
    ///
    /// Exactly one lockfile must be present. None found or more than one
    /// found are both configuration errors.
    pub fn detect(root: &Path) -> Result<Self, ConfigError> {
        let found: Vec<PackageManager> = Self::ALL
            .into_iter()
            .filter(|manager| root.join(manager.lockfile()).is_file())
            .collect();

        match found.as_slice() {
            [] => Err(ConfigError::NoPackageManager),
            [manager] => Ok(*manager),
            many => Err(ConfigError::MultiplePackageManagers {
                found: many.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pnpm => write!(f, "pnpm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Npm => write!(f, "npm"),
        }
    }
}

/// Detect the package manager and require it to be pnpm
pub fn require_pnpm(root: &Path) -> Result<PackageManager, ConfigError> {
    let manager = PackageManager::detect(root)?;
    if manager != PackageManager::Pnpm {
        return Err(ConfigError::UnsupportedPackageManager {
            found: manager.to_string(),
        });
    }
    Ok(manager)
}
