//! Check command implementation
//!
//! Implements `topobuild check` to validate the workspace without
//! building.

use anyhow::{bail, Result};
use std::path::Path;

use crate::core::check;

/// Execute the check command
pub async fn execute(workspace_root: &Path) -> Result<()> {
    let result = check::check(workspace_root);

    println!("Checking workspace...\n");

    if result.config_valid {
        println!("✓ Workspace configuration is valid");
    } else {
        println!("✗ Workspace configuration has errors");
    }

    if result.manifests_valid {
        println!("✓ All package manifests parse");
    } else {
        println!("✗ Package manifest issues found");
    }

    if result.dependencies_valid {
        println!("✓ All local dependencies are resolvable");
    } else {
        println!("⚠ Unresolvable local dependencies found");
    }

    if result.order_valid {
        println!("✓ Build order exists");
    } else {
        println!("✗ No build order (circular dependencies)");
    }

    if result.package_manager_available {
        println!("✓ pnpm is available");
    } else {
        println!("⚠ pnpm not found in PATH");
    }

    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  ⚠ {warning}");
        }
    }

    if !result.ignored.is_empty() {
        println!("\nIgnored packages:");
        for name in &result.ignored {
            println!("  - {name}");
        }
    }

    println!("\nPackages that would be built:");
    if result.build_order.is_empty() {
        println!("  (none)");
    } else {
        for name in &result.build_order {
            println!("  • {name}");
        }
    }

    println!();
    if result.is_valid() {
        println!("✓ Check passed - ready to build");
        Ok(())
    } else {
        bail!("Check failed - fix the issues above before building");
    }
}
