use super::invocation::Invocation;
use super::outcome::{Execution, InvocationStatus};
use tracing::{debug, info};

/// Executes a single workflow invocation and reports how it went.
///
/// Implementations must not panic or return early on failure; every outcome is reported
/// through the returned [`Execution`] so the caller can continue with the next row.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Execution;

    /// Whether this runner starts real processes. The driver only creates the output root
    /// for runners that do.
    fn executes(&self) -> bool {
        true
    }
}

/// Spawns the real process, waits for it, and captures its output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Execution {
        debug!("Spawning: {}", invocation.command_line());
        match invocation.to_command().output() {
            Ok(output) => {
                let status = if output.status.success() {
                    InvocationStatus::Succeeded
                } else {
                    InvocationStatus::Failed {
                        code: output.status.code(),
                    }
                };
                Execution {
                    status,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            Err(e) => Execution::without_output(InvocationStatus::SpawnFailed {
                message: format!("failed to start {:?}: {}", invocation.program, e),
            }),
        }
    }
}

/// Logs the command line instead of running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Execution {
        info!("[dry-run] {}", invocation.command_line());
        Execution::without_output(InvocationStatus::Skipped)
    }

    fn executes(&self) -> bool {
        false
    }
}
