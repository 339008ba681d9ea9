use super::command::{CommandError, CommandRunner};
use crate::ports::outbound::ExternalSbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Program looked up on PATH when no explicit sbomnix path is configured
pub const DEFAULT_SBOMNIX_PATH: &str = "sbomnix";

const TOOL_NAME: &str = "sbomnix";

/// SbomnixRunner adapter delegating Nix SBOM generation to sbomnix
///
/// Runs `sbomnix <target> --spdx=<output>`; sbomnix's own output is passed
/// through to the terminal.
pub struct SbomnixRunner {
    program: PathBuf,
    runner: CommandRunner,
}

impl SbomnixRunner {
    pub fn new(program: PathBuf, runner: CommandRunner) -> Self {
        Self { program, runner }
    }

    fn tool_failed(details: String) -> SbomError {
        SbomError::ExternalToolFailed {
            tool: TOOL_NAME.to_string(),
            details,
        }
    }
}

#[async_trait]
impl ExternalSbomGenerator for SbomnixRunner {
    async fn generate(&self, target: &Path, output: &Path) -> Result<()> {
        if !target.exists() {
            return Err(SbomError::InvalidTargetPath {
                path: target.to_path_buf(),
                reason: "path does not exist".to_string(),
            }
            .into());
        }

        let mut spdx_flag = OsString::from("--spdx=");
        spdx_flag.push(output);

        let mut command = Command::new(&self.program);
        command.arg(target).arg(spdx_flag);

        let status = self.runner.status(command).await.map_err(|e| match e {
            CommandError::TimedOut(seconds) => SbomError::CommandTimedOut {
                command: self.program.display().to_string(),
                seconds,
            },
            CommandError::Spawn(err) => {
                Self::tool_failed(format!("{}: {}", self.program.display(), err))
            }
        })?;

        if !status.success() {
            return Err(Self::tool_failed(format!("exited with {}", status)).into());
        }

        Ok(())
    }
}
