//! Core orchestration logic
//!
//! Everything between raw workspace files and executed build commands
//! lives here. Process launching stays in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`workspace`] - Workspace configuration and package manager detection
//! - [`manifest`] - Package manifest parsing and local dependency extraction
//! - [`resolver`] - Dependency graph and topological ordering
//! - [`ignore`] - Ignore file handling
//! - [`builder`] - Build pipeline orchestration
//! - [`check`] - Workspace health checks
//! - [`tree`] - Dependency tree visualization

pub mod builder;
pub mod check;
pub mod ignore;
pub mod manifest;
pub mod resolver;
pub mod tree;
pub mod workspace;
