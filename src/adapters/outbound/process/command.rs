use std::future::Future;
use std::io;
use std::process::{ExitStatus, Output};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Why an external command produced no exit status
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start: {0}")]
    Spawn(#[source] io::Error),

    #[error("did not finish within {0}s")]
    TimedOut(u64),
}

/// CommandRunner runs external commands one at a time with an optional timeout
///
/// Children are killed when their future is dropped, so a timed out command
/// does not outlive the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    timeout: Option<Duration>,
}

impl CommandRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Runs `command` capturing stdout and stderr
    pub async fn output(&self, mut command: Command) -> Result<Output, CommandError> {
        command.kill_on_drop(true);
        self.bounded(command.output())
            .await?
            .map_err(CommandError::Spawn)
    }

    /// Runs `command` with inherited stdio
    pub async fn status(&self, mut command: Command) -> Result<ExitStatus, CommandError> {
        command.kill_on_drop(true);
        self.bounded(command.status())
            .await?
            .map_err(CommandError::Spawn)
    }

    async fn bounded<F, T>(&self, future: F) -> Result<T, CommandError>
    where
        F: Future<Output = T>,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, future)
                .await
                .map_err(|_| CommandError::TimedOut(limit.as_secs())),
            None => Ok(future.await),
        }
    }
}

/// Trimmed stderr of a failed command, or its exit status when stderr is empty
pub(super) fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr.lines().next().unwrap_or(stderr).to_string()
    }
}
