//! Ignore list (.tbignore) parsing and order filtering
//!
//! Ignored packages are dropped from the executed build order only. Their
//! graph edges stay intact, so packages depending on an ignored package are
//! still ordered (and built) correctly.

use std::collections::HashSet;
use std::path::Path;

use crate::config::defaults::IGNORE_FILE;

/// Set of package names excluded from build execution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Create an empty ignore set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the ignore set from the workspace root
    ///
    /// A missing ignore file means an empty set, not an error.
    pub fn load(root: &Path) -> Self {
        match std::fs::read_to_string(root.join(IGNORE_FILE)) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::new(),
        }
    }

    /// Parse an ignore list: one package name per line, blank lines skipped
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { names }
    }

    /// Whether a package name is ignored
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of ignored names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Remove ignored names from a build order, preserving relative order
    ///
    /// Ignore names that never appear in the order are silently a no-op.
    pub fn filter_order(&self, order: &[String]) -> Vec<String> {
        order
            .iter()
            .filter(|name| !self.names.contains(name.as_str()))
            .cloned()
            .collect()
    }
}
