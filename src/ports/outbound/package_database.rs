use crate::shared::Result;
use async_trait::async_trait;

/// PackageDatabase port for querying the system package manager
///
/// Both methods return the raw command output; parsing happens in the
/// domain services.
#[async_trait]
pub trait PackageDatabase: Send + Sync {
    /// Lists every known package as tab-separated
    /// name / version / architecture / status / maintainer / homepage /
    /// description lines
    ///
    /// # Errors
    /// Returns an error if the query tool is missing or exits unsuccessfully.
    /// Callers treat this as fatal.
    async fn query_installed(&self) -> Result<String>;

    /// Lists the files installed by one package, one path per line
    ///
    /// # Errors
    /// Returns an error if the listing fails. Callers only lose the checksum
    /// of this package.
    async fn list_package_files(&self, package_name: &str) -> Result<String>;
}
