//! Dependency tree visualization
//!
//! Renders the workspace dependency graph as an ASCII tree or in DOT
//! graph format. Output order follows discovery order and sorted
//! dependency lists, so repeated runs produce identical text.

use std::collections::HashSet;
use std::path::Path;

use crate::core::resolver::DependencyGraph;
use crate::core::workspace::WorkspaceConfig;
use crate::error::{ResolveError, TopobuildError};
use crate::infra::discovery::{discover_manifests, load_manifests};

/// Packages that no other package depends on, in discovery order
///
/// Falls back to every package when all of them have dependents, which
/// happens when the whole graph is one cycle.
fn roots(graph: &DependencyGraph) -> Vec<String> {
    let mut depended_on: HashSet<&str> = HashSet::new();
    for name in graph.packages() {
        if let Some(deps) = graph.dependencies_of(name) {
            depended_on.extend(deps.iter().map(String::as_str));
        }
    }

    let roots: Vec<String> = graph
        .packages()
        .iter()
        .filter(|name| !depended_on.contains(name.as_str()))
        .cloned()
        .collect();

    if roots.is_empty() {
        graph.packages().to_vec()
    } else {
        roots
    }
}

/// Format the whole workspace as an ASCII tree
pub fn format_tree(graph: &DependencyGraph) -> String {
    if graph.is_empty() {
        return "No packages in workspace".to_string();
    }

    let mut output = String::new();
    output.push_str("Dependency tree:\n");

    if let Err(e) = graph.topological_sort() {
        output.push_str(&format!("\n⚠ {e}\n"));
    }

    let roots = roots(graph);
    for (i, root) in roots.iter().enumerate() {
        let is_last = i == roots.len() - 1;
        format_node(graph, &mut output, root, "", is_last, &mut HashSet::new());
    }

    output
}

/// Format the subtree below one package
///
/// The cycle banner considers only the part of the graph the package can
/// reach; cycles elsewhere in the workspace are not its problem.
pub fn format_tree_for_package(graph: &DependencyGraph, package: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Dependencies for '{package}':\n"));

    if let Err(e) = subgraph_from(graph, package).topological_sort() {
        output.push_str(&format!("\n⚠ {e}\n"));
    }

    format_node(graph, &mut output, package, "", true, &mut HashSet::new());
    output
}

/// Restriction of the graph to the packages reachable from `package`
fn subgraph_from(graph: &DependencyGraph, package: &str) -> DependencyGraph {
    let mut reachable = HashSet::new();
    collect_reachable(graph, package, &mut reachable);

    let mut sub = DependencyGraph::new();
    for name in graph.packages() {
        if !reachable.contains(name.as_str()) {
            continue;
        }
        if let Some(deps) = graph.dependencies_of(name) {
            sub.add_package(name, deps.to_vec());
        }
    }
    sub
}

fn format_node(
    graph: &DependencyGraph,
    output: &mut String,
    node: &str,
    prefix: &str,
    is_last: bool,
    visited: &mut HashSet<String>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    let label = if graph.contains(node) {
        node.to_string()
    } else {
        format!("{node} (missing)")
    };
    output.push_str(&format!("{prefix}{connector}{label}\n"));

    if visited.contains(node) {
        // Already on this branch, stop here to avoid looping on cycles
        return;
    }
    visited.insert(node.to_string());

    if let Some(deps) = graph.dependencies_of(node) {
        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        for (i, dep) in deps.iter().enumerate() {
            let is_last_dep = i == deps.len() - 1;
            format_node(graph, output, dep, &child_prefix, is_last_dep, visited);
        }
    }

    visited.remove(node);
}

/// Names referenced as dependencies but not discovered as packages, in
/// first-reference order
fn dangling_names(graph: &DependencyGraph) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for package in graph.packages() {
        if let Some(deps) = graph.dependencies_of(package) {
            for dep in deps {
                if !graph.contains(dep) && seen.insert(dep.clone()) {
                    names.push(dep.clone());
                }
            }
        }
    }
    names
}

/// Format the whole workspace as a DOT graph
pub fn format_dot(graph: &DependencyGraph) -> String {
    let mut output = String::new();
    output.push_str("digraph dependencies {\n");
    output.push_str("    rankdir=TB;\n");
    output.push_str("    node [shape=box];\n");
    output.push('\n');

    for package in graph.packages() {
        output.push_str(&format!("    \"{package}\";\n"));
    }
    for name in dangling_names(graph) {
        output.push_str(&format!("    \"{name}\" [style=dotted];\n"));
    }
    output.push('\n');

    for package in graph.packages() {
        if let Some(deps) = graph.dependencies_of(package) {
            for dep in deps {
                output.push_str(&format!("    \"{package}\" -> \"{dep}\";\n"));
            }
        }
    }

    output.push_str("}\n");
    output
}

/// Format the packages reachable from one package as a DOT graph
pub fn format_dot_for_package(graph: &DependencyGraph, package: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("digraph \"{package}\" {{\n"));
    output.push_str("    rankdir=TB;\n");
    output.push_str("    node [shape=box];\n");
    output.push('\n');

    let mut reachable = HashSet::new();
    collect_reachable(graph, package, &mut reachable);

    // Emit nodes in discovery order, then dangling names
    for name in graph.packages() {
        if reachable.contains(name.as_str()) {
            output.push_str(&format!("    \"{name}\";\n"));
        }
    }
    for name in dangling_names(graph) {
        if reachable.contains(name.as_str()) {
            output.push_str(&format!("    \"{name}\" [style=dotted];\n"));
        }
    }
    output.push('\n');

    for from in graph.packages() {
        if !reachable.contains(from.as_str()) {
            continue;
        }
        if let Some(deps) = graph.dependencies_of(from) {
            for dep in deps {
                output.push_str(&format!("    \"{from}\" -> \"{dep}\";\n"));
            }
        }
    }

    output.push_str("}\n");
    output
}

fn collect_reachable(graph: &DependencyGraph, package: &str, reachable: &mut HashSet<String>) {
    if reachable.contains(package) {
        return;
    }
    reachable.insert(package.to_string());

    if let Some(deps) = graph.dependencies_of(package) {
        for dep in deps {
            collect_reachable(graph, dep, reachable);
        }
    }
}

/// Load a workspace and render its dependency tree
///
/// With a package name, renders only that package's subtree. With
/// `graph_format`, emits DOT instead of ASCII.
pub async fn display_tree(
    root: &Path,
    package: Option<&str>,
    graph_format: bool,
) -> Result<String, TopobuildError> {
    let config = WorkspaceConfig::load(root)?;
    let paths = discover_manifests(root, &config.packages)?;
    let manifests = load_manifests(&paths).await?;
    let sets: Vec<_> = manifests
        .iter()
        .map(super::manifest::PackageManifest::local_dependencies)
        .collect();
    let graph = DependencyGraph::from_local_sets(&sets);

    if let Some(name) = package {
        if !graph.contains(name) {
            return Err(ResolveError::UnknownPackage {
                name: name.to_string(),
            }
            .into());
        }
        if graph_format {
            Ok(format_dot_for_package(&graph, name))
        } else {
            Ok(format_tree_for_package(&graph, name))
        }
    } else if graph_format {
        Ok(format_dot(&graph))
    } else {
        Ok(format_tree(&graph))
    }
}
