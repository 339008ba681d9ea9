use super::spdx_value::SpdxValue;

/// LicenseInfo value object: normalized license plus copyright preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseInfo {
    license: SpdxValue,
    copyright: SpdxValue,
}

impl LicenseInfo {
    pub fn new(license: SpdxValue, copyright: SpdxValue) -> Self {
        Self { license, copyright }
    }

    /// Used when the package ships no readable copyright file
    pub fn unasserted() -> Self {
        Self::new(SpdxValue::Unasserted, SpdxValue::Unasserted)
    }

    pub fn license(&self) -> &SpdxValue {
        &self.license
    }

    pub fn copyright(&self) -> &SpdxValue {
        &self.copyright
    }
}
