//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress indicators,
//! status glyphs, and errors. The global [`OutputConfig`] decides how
//! much of it reaches the terminal.

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

/// Process-wide output settings
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress informational output
    pub quiet: bool,
    /// Verbosity level from repeated -v flags
    pub verbose: u8,
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Install this configuration process-wide. The first write wins.
    pub fn apply_global(self) {
        let _ = OUTPUT_CONFIG.set(self);
    }

    /// The installed configuration, or defaults when none was installed
    pub fn global() -> Self {
        OUTPUT_CONFIG.get().copied().unwrap_or_default()
    }
}

/// Print an informational line unless quiet mode is active
pub fn emit(message: impl std::fmt::Display) {
    if !OutputConfig::global().quiet {
        println!("{message}");
    }
}

/// Print an error to stderr as a single line
///
/// The cause chain is appended only in verbose mode.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    if OutputConfig::global().verbose > 0 {
        for cause in error.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    if OutputConfig::global().quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
