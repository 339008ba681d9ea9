use super::command::{failure_details, CommandError, CommandRunner};
use crate::ports::outbound::PackageDatabase;
use crate::sbom_generation::services::DpkgOutputParser;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use tokio::process::Command;

const DPKG_QUERY: &str = "dpkg-query";
const DPKG: &str = "dpkg";

/// DpkgClient adapter querying the dpkg database through its command-line tools
pub struct DpkgClient {
    runner: CommandRunner,
}

impl DpkgClient {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    fn query_failed(details: String) -> SbomError {
        SbomError::PackageQueryFailed {
            command: DPKG_QUERY.to_string(),
            details,
        }
    }
}

#[async_trait]
impl PackageDatabase for DpkgClient {
    async fn query_installed(&self) -> Result<String> {
        let mut command = Command::new(DPKG_QUERY);
        command
            .arg("-W")
            .arg(format!("-f={}", DpkgOutputParser::query_format()));

        let output = self.runner.output(command).await.map_err(|e| match e {
            CommandError::TimedOut(seconds) => SbomError::CommandTimedOut {
                command: DPKG_QUERY.to_string(),
                seconds,
            },
            CommandError::Spawn(err) => Self::query_failed(err.to_string()),
        })?;

        if !output.status.success() {
            return Err(Self::query_failed(failure_details(&output)).into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn list_package_files(&self, package_name: &str) -> Result<String> {
        let mut command = Command::new(DPKG);
        command.arg("-L").arg(package_name);

        let output = self
            .runner
            .output(command)
            .await
            .map_err(|e| anyhow::anyhow!("{} -L {}: {}", DPKG, package_name, e))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} -L {}: {}",
                DPKG,
                package_name,
                failure_details(&output)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
