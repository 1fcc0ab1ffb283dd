//! Dependency graph construction and build ordering
//!
//! Aggregates per-package local dependency sets into a directed graph and
//! computes a topological build order, detecting cycles.

use std::collections::{HashMap, HashSet};

use crate::core::manifest::LocalDependencySet;
use crate::error::ResolveError;

/// Directed graph of in-workspace package dependencies
///
/// Edges point from a package to the local packages it depends on. A
/// dependency target that was never added as a package stays in the graph
/// as a dangling edge; validation of those is the caller's concern.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Adjacency list: package -> local dependencies
    edges: HashMap<String, Vec<String>>,
    /// Package insertion order; the traversal base order
    order: Vec<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from the full collection of local dependency sets
    pub fn from_local_sets(sets: &[LocalDependencySet]) -> Self {
        let mut graph = Self::new();
        for set in sets {
            graph.add_package(&set.name, set.deps.clone());
        }
        graph
    }

    /// Add a package and its local dependencies to the graph
    pub fn add_package(&mut self, name: &str, dependencies: Vec<String>) {
        if !self.edges.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.edges.insert(name.to_string(), dependencies);
    }

    /// Packages added to the graph, in insertion order
    pub fn packages(&self) -> &[String] {
        &self.order
    }

    /// Whether a name was added as a package (not just a dependency target)
    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Local dependencies of a package, if it was added
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    /// Number of packages in the graph
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no packages
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dependency edges whose target was never added as a package
    ///
    /// Returns (dependent, missing dependency) pairs in traversal order.
    /// These indicate a configuration inconsistency: the workspace declares
    /// a `workspace:` link to a package the discovery step never found.
    pub fn missing_dependencies(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for name in &self.order {
            if let Some(deps) = self.edges.get(name) {
                for dep in deps {
                    if !self.edges.contains_key(dep) {
                        missing.push((name.clone(), dep.clone()));
                    }
                }
            }
        }
        missing
    }

    /// Compute the topological build order
    ///
    /// Returns packages in an order where dependencies come before
    /// dependents. The traversal visits packages in insertion order and each
    /// package's dependencies in their recorded order, so the result is
    /// deterministic for a given construction sequence. Dangling dependency
    /// names surface early as leaves.
    pub fn topological_sort(&self) -> Result<Vec<String>, ResolveError> {
        let mut visited = HashSet::new();
        let mut in_progress = HashSet::new();
        let mut result = Vec::new();
        let mut path = Vec::new();

        for node in &self.order {
            if !visited.contains(node) {
                self.visit(node, &mut visited, &mut in_progress, &mut result, &mut path)?;
            }
        }

        Ok(result)
    }

    fn visit(
        &self,
        node: &str,
        visited: &mut HashSet<String>,
        in_progress: &mut HashSet<String>,
        result: &mut Vec<String>,
        path: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        if in_progress.contains(node) {
            // Reached a node that is still being expanded: circular
            // dependency. Trim the path to the cycle's participants.
            let start = path.iter().position(|n| n == node).unwrap_or(0);
            let mut cycle: Vec<String> = path[start..].to_vec();
            cycle.push(node.to_string());
            return Err(ResolveError::CircularDependency { cycle });
        }

        if visited.contains(node) {
            return Ok(());
        }

        in_progress.insert(node.to_string());
        path.push(node.to_string());

        if let Some(deps) = self.edges.get(node) {
            for dep in deps {
                self.visit(dep, visited, in_progress, result, path)?;
            }
        }

        path.pop();
        in_progress.remove(node);
        visited.insert(node.to_string());
        result.push(node.to_string());

        Ok(())
    }

    /// Check if the graph has any cycles
    pub fn has_cycle(&self) -> bool {
        self.topological_sort().is_err()
    }
}
