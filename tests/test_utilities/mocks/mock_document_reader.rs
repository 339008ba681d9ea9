use std::collections::HashMap;
use std::path::{Path, PathBuf};
use ubuntu_nix_sbom::prelude::*;

/// Mock DocumentReader parsing in-memory JSON per path
#[derive(Default)]
pub struct MockDocumentReader {
    documents: HashMap<PathBuf, String>,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, json: &str) -> Self {
        self.documents.insert(PathBuf::from(path), json.to_string());
        self
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<SpdxDocument> {
        let json = self
            .documents
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Failed to read SBOM document: {}", path.display()))?;
        Ok(serde_json::from_str(json)?)
    }
}
