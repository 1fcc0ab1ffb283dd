//! Error types for topobuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Workspace configuration errors
///
/// All of these abort the run before any graph work begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Workspace descriptor missing
    #[error("No workspace file found at '{path}'. Run topobuild from the monorepo root.")]
    WorkspaceNotFound { path: PathBuf },

    /// Workspace descriptor unreadable or malformed
    #[error("Failed to parse workspace file '{path}': {error}")]
    WorkspaceParse { path: PathBuf, error: String },

    /// No package manager lockfile present
    #[error("No package manager found (no lockfile in the workspace root)")]
    NoPackageManager,

    /// More than one lockfile present
    #[error("Multiple package managers found: {}", found.join(", "))]
    MultiplePackageManagers { found: Vec<String> },

    /// Lockfile belongs to an unsupported package manager
    #[error("Only pnpm workspaces are supported, found '{found}'")]
    UnsupportedPackageManager { found: String },

    /// Strict mode: dependency edges point at undiscovered packages
    #[error("Unknown workspace dependencies: {}", missing.iter().map(|(from, to)| format!("'{to}' (required by '{from}')")).collect::<Vec<_>>().join(", "))]
    MissingPackages { missing: Vec<(String, String)> },
}

/// Package manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest unreadable
    #[error("Failed to read manifest '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Manifest is not valid JSON or lacks required fields
    #[error("Failed to parse manifest '{path}': {error}")]
    ParseFailed { path: PathBuf, error: String },

    /// Manifest declares an empty package name
    #[error("Manifest '{path}' has an empty package name")]
    EmptyName { path: PathBuf },
}

/// Manifest discovery errors
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Directory walk failed
    #[error("Failed to scan '{path}': {error}")]
    WalkFailed { path: PathBuf, error: String },
}

/// Dependency ordering errors
#[derive(Error, Debug, PartialEq)]
pub enum ResolveError {
    /// Circular dependency detected
    #[error("Circular dependency detected: {}", cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    /// Named package is not part of the workspace
    #[error("Package '{name}' is not in the workspace")]
    UnknownPackage { name: String },
}

/// Build execution errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Build command exited with a nonzero status
    #[error("Build failed for package '{package}': {error}")]
    CommandFailed { package: String, error: String },

    /// Build command could not be launched
    #[error("Failed to launch build command for package '{package}': {error}")]
    SpawnFailed { package: String, error: String },
}

/// Top-level topobuild error type
#[derive(Error, Debug)]
pub enum TopobuildError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Discovery error
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Ordering error
    #[error("Ordering error: {0}")]
    Resolve(#[from] ResolveError),
}
