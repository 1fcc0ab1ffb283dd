//! Build pipeline orchestration
//!
//! Drives a run through its stages: graph construction, topological
//! ordering, filtering, and sequential execution. Each stage records its
//! outcome on the pipeline so callers can inspect where a run stands and
//! what it produced without re-deriving anything.

use crate::config::defaults::PACKAGE_PLACEHOLDER;
use crate::core::ignore::IgnoreSet;
use crate::core::manifest::LocalDependencySet;
use crate::core::resolver::DependencyGraph;
use crate::error::{BuildError, ResolveError};
use crate::infra::process::CommandRunner;

/// Settings for a single run, resolved by the caller up front
#[derive(Debug, Clone, Copy, Default)]
pub struct RunConfig {
    /// Compute and report the order without launching any build command
    pub skip_execution: bool,
    /// Surface per-package command output in the log
    pub verbose: bool,
}

/// Where a run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    GraphBuilt,
    Ordered,
    Filtered,
    Executing,
    Done,
    Failed,
}

/// Per-package execution outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Packages whose build command succeeded, in execution order
    pub built: Vec<String>,
    /// Whether execution was skipped entirely (dry run)
    pub skipped_execution: bool,
}

/// Orchestrates one build run from manifest data to executed commands
#[derive(Debug)]
pub struct BuildPipeline {
    config: RunConfig,
    stage: RunStage,
    graph: DependencyGraph,
    order: Vec<String>,
    build_list: Vec<String>,
    statuses: Vec<(String, PackageStatus)>,
}

impl BuildPipeline {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            stage: RunStage::Idle,
            graph: DependencyGraph::new(),
            order: Vec::new(),
            build_list: Vec::new(),
            statuses: Vec::new(),
        }
    }

    pub fn stage(&self) -> RunStage {
        self.stage
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Full dependency-first order, before any filtering
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Packages that will actually be built, in execution order
    pub fn build_list(&self) -> &[String] {
        &self.build_list
    }

    /// Per-package statuses for the current build list
    pub fn statuses(&self) -> &[(String, PackageStatus)] {
        &self.statuses
    }

    /// Workspace-protocol dependencies that no discovered package
    /// provides, as (dependent, missing) pairs
    pub fn missing_dependencies(&self) -> Vec<(String, String)> {
        self.graph.missing_dependencies()
    }

    /// Assemble the dependency graph from each package's local
    /// dependency set
    pub fn build_graph(&mut self, sets: &[LocalDependencySet]) {
        self.graph = DependencyGraph::from_local_sets(sets);
        self.stage = RunStage::GraphBuilt;
        tracing::debug!(
            "graph built: {} packages, {} local dependency edges",
            self.graph.len(),
            sets.iter().map(|s| s.deps.len()).sum::<usize>()
        );
    }

    /// Compute the dependency-first build order
    ///
    /// A circular dependency marks the run failed and surfaces the cycle
    /// participants in the error.
    pub fn compute_order(&mut self) -> Result<(), ResolveError> {
        match self.graph.topological_sort() {
            Ok(order) => {
                self.order = order;
                self.stage = RunStage::Ordered;
                Ok(())
            }
            Err(e) => {
                self.stage = RunStage::Failed;
                Err(e)
            }
        }
    }

    /// Drop ignored packages and names that are not discovered packages
    /// from the order
    ///
    /// Survivors keep their relative order and start out
    /// [`PackageStatus::Pending`].
    pub fn apply_filters(&mut self, ignore: &IgnoreSet) {
        self.build_list = ignore
            .filter_order(&self.order)
            .into_iter()
            .filter(|name| self.graph.contains(name))
            .collect();
        self.statuses = self
            .build_list
            .iter()
            .map(|name| (name.clone(), PackageStatus::Pending))
            .collect();
        self.stage = RunStage::Filtered;

        let dropped = self.order.len() - self.build_list.len();
        if dropped > 0 {
            tracing::debug!("filtered out {dropped} of {} packages", self.order.len());
        }
    }

    /// Run the build command for each package in order, stopping at the
    /// first failure
    ///
    /// Every occurrence of the package placeholder in `template` is
    /// replaced with the package name before the command runs. With
    /// `skip_execution` set, the run completes without launching
    /// anything.
    pub async fn execute(
        &mut self,
        runner: &CommandRunner,
        template: &str,
    ) -> Result<RunReport, BuildError> {
        if self.config.skip_execution {
            tracing::info!(
                "skipping execution of {} package(s)",
                self.build_list.len()
            );
            self.stage = RunStage::Done;
            return Ok(RunReport {
                built: Vec::new(),
                skipped_execution: true,
            });
        }

        self.stage = RunStage::Executing;
        let mut built = Vec::new();
        let queue = self.build_list.clone();

        for name in queue {
            let command = template.replace(PACKAGE_PLACEHOLDER, &name);
            self.set_status(&name, PackageStatus::Running);
            tracing::info!("building package: {name}");
            tracing::debug!("running: {command}");

            let output = runner.run(&command).await;

            if output.success {
                if self.config.verbose && !output.stdout.is_empty() {
                    tracing::info!("{name} output:\n{}", output.stdout.trim_end());
                }
                self.set_status(&name, PackageStatus::Succeeded);
                built.push(name);
                continue;
            }

            self.set_status(&name, PackageStatus::Failed);
            self.stage = RunStage::Failed;
            let error = output
                .error
                .unwrap_or_else(|| "unknown failure".to_string());
            return Err(if output.launched {
                BuildError::CommandFailed {
                    package: name,
                    error,
                }
            } else {
                BuildError::SpawnFailed {
                    package: name,
                    error,
                }
            });
        }

        self.stage = RunStage::Done;
        Ok(RunReport {
            built,
            skipped_execution: false,
        })
    }

    fn set_status(&mut self, name: &str, status: PackageStatus) {
        if let Some(entry) = self.statuses.iter_mut().find(|(n, _)| n == name) {
            entry.1 = status;
        }
    }
}
