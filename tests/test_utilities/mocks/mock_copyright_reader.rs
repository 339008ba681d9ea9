use std::collections::HashMap;
use ubuntu_nix_sbom::prelude::*;

/// Mock CopyrightReader backed by an in-memory map
#[derive(Default)]
pub struct MockCopyrightReader {
    files: HashMap<String, String>,
}

impl MockCopyrightReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copyright(mut self, package_name: &str, contents: &str) -> Self {
        self.files
            .insert(package_name.to_string(), contents.to_string());
        self
    }
}

impl CopyrightReader for MockCopyrightReader {
    fn read_copyright(&self, package_name: &str) -> Result<String> {
        self.files
            .get(package_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no copyright file for {}", package_name))
    }
}
