//! CLI command for displaying the dependency tree
//!
//! Implements the `topobuild tree` command.

use std::path::Path;

use anyhow::Result;

use crate::core::tree;

/// Execute the tree command
pub async fn execute(workspace_root: &Path, package: Option<String>, graph: bool) -> Result<()> {
    let output = tree::display_tree(workspace_root, package.as_deref(), graph).await?;
    println!("{output}");
    Ok(())
}
