use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use ubuntu_nix_sbom::prelude::*;

/// Mock ExternalSbomGenerator writing a canned document to the requested output
#[derive(Clone)]
pub struct MockSbomGenerator {
    document: Option<String>,
    pub calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl MockSbomGenerator {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A generator that fails like a missing sbomnix binary
    pub fn failing() -> Self {
        Self {
            document: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl ExternalSbomGenerator for MockSbomGenerator {
    async fn generate(&self, target: &Path, output: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((target.to_path_buf(), output.to_path_buf()));

        match &self.document {
            Some(document) => Ok(std::fs::write(output, document)?),
            None => anyhow::bail!("External tool sbomnix failed: No such file or directory"),
        }
    }
}
