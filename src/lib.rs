//! Topobuild - Dependency-aware build runner for pnpm workspaces
//!
//! This library provides the core functionality for building the packages
//! of a pnpm monorepo in dependency order: discover package manifests,
//! assemble the local dependency graph, order it topologically, and run
//! each package's build command in sequence.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Orchestration logic (graph, ordering, build pipeline)
//! - [`infra`] - Infrastructure layer (filesystem scanning, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
