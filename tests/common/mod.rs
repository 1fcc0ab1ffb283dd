//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory holding a pnpm workspace and provides
/// utilities for setting up test scenarios.
pub struct TestWorkspace {
    /// Temporary directory for the test workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a workspace with the standard layout: a workspace file
    /// listing `packages/*` and a pnpm lockfile
    pub fn init() -> Self {
        let ws = Self::new();
        ws.create_file("pnpm-workspace.yaml", "packages:\n  - 'packages/*'\n");
        ws.create_file("pnpm-lock.yaml", "lockfileVersion: '9.0'\n");
        ws
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Add a package under `packages/<name>` with workspace dependencies
    pub fn add_package(&self, name: &str, deps: &[&str]) {
        self.add_package_at(&format!("packages/{name}"), name, deps);
    }

    /// Add a package manifest at an explicit directory
    pub fn add_package_at(&self, dir: &str, name: &str, deps: &[&str]) {
        let deps_json: Vec<String> = deps
            .iter()
            .map(|dep| format!("\"{dep}\": \"workspace:*\""))
            .collect();
        let manifest = format!(
            "{{\n  \"name\": \"{name}\",\n  \"version\": \"1.0.0\",\n  \"dependencies\": {{ {} }}\n}}\n",
            deps_json.join(", ")
        );
        self.create_file(&format!("{dir}/package.json"), &manifest);
    }

    /// A build command template that appends each package name to a log
    /// file, for asserting execution order
    pub fn logging_template(&self) -> String {
        format!(
            "echo PACKAGE >> {}",
            self.dir.path().join("build.log").display()
        )
    }

    /// The build log contents as a list of package names
    pub fn build_log(&self) -> Vec<String> {
        self.read_file("build.log")
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
