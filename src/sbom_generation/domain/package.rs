use super::license_info::LicenseInfo;

/// Placeholder dpkg-query prints for an unset field
const DPKG_UNSET_FIELD: &str = "(none)";

/// InstalledPackage value object: one accepted line of dpkg-query output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    name: String,
    version: String,
    architecture: String,
    status: String,
    maintainer: String,
    homepage: String,
    description: String,
}

impl InstalledPackage {
    pub fn new(
        name: String,
        version: String,
        architecture: String,
        status: String,
        maintainer: String,
        homepage: String,
        description: String,
    ) -> Self {
        Self {
            name,
            version,
            architecture,
            status,
            maintainer,
            homepage,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Maintainer, unless dpkg left it empty or `(none)`
    pub fn maintainer(&self) -> Option<&str> {
        known_field(&self.maintainer)
    }

    /// Homepage, unless dpkg left it empty or `(none)`
    pub fn homepage(&self) -> Option<&str> {
        known_field(&self.homepage)
    }
}

fn known_field(value: &str) -> Option<&str> {
    if value.is_empty() || value == DPKG_UNSET_FIELD {
        None
    } else {
        Some(value)
    }
}

/// PackageRecord: everything known about one installed package before it
/// becomes an SPDX package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    package: InstalledPackage,
    license_info: LicenseInfo,
    sha256: Option<String>,
}

impl PackageRecord {
    pub fn new(package: InstalledPackage, license_info: LicenseInfo, sha256: Option<String>) -> Self {
        Self {
            package,
            license_info,
            sha256,
        }
    }

    pub fn package(&self) -> &InstalledPackage {
        &self.package
    }

    pub fn license_info(&self) -> &LicenseInfo {
        &self.license_info
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }
}
