use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ExternalSbomGenerator port for tools that write an SPDX document themselves
#[async_trait]
pub trait ExternalSbomGenerator: Send + Sync {
    /// Generates an SPDX JSON document for `target` at `output`
    ///
    /// # Errors
    /// Returns an error if the target does not exist, the tool cannot be
    /// started, exits unsuccessfully or runs past its timeout.
    async fn generate(&self, target: &Path, output: &Path) -> Result<()>;
}
