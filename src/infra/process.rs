//! External build command execution
//!
//! Runs one build command at a time through the shell and reports the
//! outcome. There is no timeout or cancellation: a hung build command
//! blocks the run, which is an accepted limitation.

use tokio::process::Command;

/// Outcome of one external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the process exited with a success status
    pub success: bool,
    /// Whether the process could be launched at all
    pub launched: bool,
    /// Captured standard output
    pub stdout: String,
    /// Failure detail: launch error, or exit status plus captured stderr
    pub error: Option<String>,
}

impl CommandOutput {
    fn launch_failure(error: &std::io::Error) -> Self {
        Self {
            success: false,
            launched: false,
            stdout: String::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Runs build commands through the shell, one at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl CommandRunner {
    /// Create a new command runner
    pub fn new() -> Self {
        Self
    }

    /// Run a command string to completion and capture its output
    ///
    /// Launch failures are reported inside the returned [`CommandOutput`]
    /// rather than as a separate error, so callers handle every outcome
    /// through one shape.
    pub async fn run(&self, command: &str) -> CommandOutput {
        let output = match Command::new("sh").arg("-c").arg(command).output().await {
            Ok(output) => output,
            Err(e) => return CommandOutput::launch_failure(&e),
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if output.status.success() {
            CommandOutput {
                success: true,
                launched: true,
                stdout,
                error: None,
            }
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let detail = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {stderr}", output.status)
            };
            CommandOutput {
                success: false,
                launched: true,
                stdout,
                error: Some(detail),
            }
        }
    }
}
