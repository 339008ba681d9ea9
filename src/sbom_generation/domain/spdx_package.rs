use super::spdx_value::SpdxValue;
use serde::{Deserialize, Serialize};

pub const CATEGORY_PACKAGE_MANAGER: &str = "PACKAGE-MANAGER";
pub const CATEGORY_SECURITY: &str = "SECURITY";
pub const REFERENCE_TYPE_PURL: &str = "purl";
pub const REFERENCE_TYPE_CPE23: &str = "cpe23Type";

/// One software unit in an SPDX document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
    #[serde(default)]
    pub download_location: SpdxValue,
    #[serde(default)]
    pub files_analyzed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<VerificationCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
    #[serde(default)]
    pub license_concluded: SpdxValue,
    #[serde(default)]
    pub license_declared: SpdxValue,
    #[serde(default)]
    pub copyright_text: SpdxValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
}

impl SpdxPackage {
    /// A package about which nothing is asserted; the shape of every synthetic root
    pub fn unasserted(spdx_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            name: name.into(),
            version_info: None,
            download_location: SpdxValue::Unasserted,
            files_analyzed: false,
            verification_code: None,
            checksums: Vec::new(),
            home_page: None,
            license_concluded: SpdxValue::Unasserted,
            license_declared: SpdxValue::Unasserted,
            copyright_text: SpdxValue::Unasserted,
            description: None,
            supplier: None,
            external_refs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCode {
    pub package_verification_code_value: String,
}

/// Algorithm + hex digest pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checksum {
    pub algorithm: String,
    pub checksum_value: String,
}

impl Checksum {
    pub fn sha256(hex_digest: impl Into<String>) -> Self {
        Self {
            algorithm: "SHA256".to_string(),
            checksum_value: hex_digest.into(),
        }
    }
}

/// Category / type / locator triple (purl, CPE, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

impl ExternalRef {
    pub fn new(
        category: impl Into<String>,
        reference_type: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            reference_category: category.into(),
            reference_type: reference_type.into(),
            reference_locator: locator.into(),
        }
    }

    pub fn purl(locator: impl Into<String>) -> Self {
        Self::new(CATEGORY_PACKAGE_MANAGER, REFERENCE_TYPE_PURL, locator)
    }

    pub fn cpe23(locator: impl Into<String>) -> Self {
        Self::new(CATEGORY_SECURITY, REFERENCE_TYPE_CPE23, locator)
    }

    pub fn is_cpe23(&self) -> bool {
        self.reference_type == REFERENCE_TYPE_CPE23
    }
}
