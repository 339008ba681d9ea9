use std::collections::HashMap;
use ubuntu_nix_sbom::prelude::*;

/// Mock PackageDatabase serving canned dpkg-query and dpkg -L output
pub struct MockPackageDatabase {
    installed: Option<String>,
    file_lists: HashMap<String, String>,
}

impl MockPackageDatabase {
    pub fn new(installed: impl Into<String>) -> Self {
        Self {
            installed: Some(installed.into()),
            file_lists: HashMap::new(),
        }
    }

    /// A database whose query always fails, as on a system without dpkg
    pub fn unavailable() -> Self {
        Self {
            installed: None,
            file_lists: HashMap::new(),
        }
    }

    pub fn with_files(mut self, package_name: &str, listing: &str) -> Self {
        self.file_lists
            .insert(package_name.to_string(), listing.to_string());
        self
    }
}

#[async_trait::async_trait]
impl PackageDatabase for MockPackageDatabase {
    async fn query_installed(&self) -> Result<String> {
        self.installed.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "Failed to query installed packages with dpkg-query: No such file or directory"
            )
        })
    }

    async fn list_package_files(&self, package_name: &str) -> Result<String> {
        self.file_lists
            .get(package_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("dpkg -L {}: package is not installed", package_name))
    }
}
