use std::collections::HashMap;
use std::path::{Path, PathBuf};
use ubuntu_nix_sbom::prelude::*;

/// Mock FileHasher returning fixed digests; unknown paths fail like directories do
#[derive(Default)]
pub struct MockFileHasher {
    digests: HashMap<PathBuf, String>,
}

impl MockFileHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digest(mut self, path: &str, digest: &str) -> Self {
        self.digests.insert(PathBuf::from(path), digest.to_string());
        self
    }
}

impl FileHasher for MockFileHasher {
    fn sha256_hex(&self, path: &Path) -> Result<String> {
        self.digests
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} is not a regular file", path.display()))
    }
}
