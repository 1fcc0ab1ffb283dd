//! Integration tests for `topobuild check`

mod common;

use common::TestWorkspace;
use std::process::Command;

/// Helper to run topobuild check
fn run_check(ws: &TestWorkspace) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_topobuild"));
    cmd.current_dir(ws.path());
    cmd.arg("check");
    cmd.output().expect("Failed to execute topobuild check")
}

#[test]
fn test_check_passes_on_healthy_workspace() {
    let ws = TestWorkspace::init();
    ws.add_package("app", &["lib"]);
    ws.add_package("lib", &[]);

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "check should pass: {stdout}");
    assert!(stdout.contains("Check passed"));
    assert!(stdout.contains("✓ Workspace configuration is valid"));
}

#[test]
fn test_check_lists_build_order() {
    let ws = TestWorkspace::init();
    ws.add_package("app", &["lib"]);
    ws.add_package("lib", &[]);

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Packages that would be built:"));
    let lib_pos = stdout.find("• lib").expect("lib should be listed");
    let app_pos = stdout.find("• app").expect("app should be listed");
    assert!(lib_pos < app_pos, "order should be dependency-first");
}

#[test]
fn test_check_fails_without_workspace_file() {
    let ws = TestWorkspace::new();

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("✗ Workspace configuration has errors"));
}

#[test]
fn test_check_fails_without_lockfile() {
    let ws = TestWorkspace::new();
    ws.create_file("pnpm-workspace.yaml", "packages:\n  - 'packages/*'\n");

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("package manager"), "warning should name the problem: {stdout}");
}

#[test]
fn test_check_fails_on_cycle() {
    let ws = TestWorkspace::init();
    ws.add_package("a", &["b"]);
    ws.add_package("b", &["a"]);

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("✗ No build order (circular dependencies)"));
}

#[test]
fn test_check_warns_on_missing_dependency_but_passes() {
    let ws = TestWorkspace::init();
    ws.add_package("app", &["ghost"]);

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "missing deps only warn: {stdout}");
    assert!(stdout.contains("ghost"));
    assert!(stdout.contains("⚠ Unresolvable local dependencies found"));
}

#[test]
fn test_check_fails_on_unparsable_manifest() {
    let ws = TestWorkspace::init();
    ws.create_file("packages/broken/package.json", "{ not json");

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("✗ Package manifest issues found"));
}

#[test]
fn test_check_lists_ignored_packages() {
    let ws = TestWorkspace::init();
    ws.add_package("a", &[]);
    ws.add_package("b", &[]);
    ws.create_file(".tbignore", "b\n");

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Ignored packages:"));
    assert!(stdout.contains("- b"));
}

#[test]
fn test_check_empty_workspace_passes() {
    let ws = TestWorkspace::init();

    let output = run_check(&ws);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("(none)"));
}
