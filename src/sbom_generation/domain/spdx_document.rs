use super::relationship::{Relationship, RelationshipType};
use super::sbom_metadata::DocumentMetadata;
use super::spdx_package::SpdxPackage;
use serde::{Deserialize, Serialize};

pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const DATA_LICENSE: &str = "CC0-1.0";
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
pub const LICENSE_LIST_VERSION: &str = "3.20";
/// Marker every SPDX element identifier starts with
pub const SPDX_REF_PREFIX: &str = "SPDXRef-";

/// Top-level SPDX 2.3 document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    pub spdx_version: String,
    pub data_license: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    pub packages: Vec<SpdxPackage>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    pub created: String,
    pub creators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_list_version: Option<String>,
}

impl SpdxDocument {
    /// An empty document carrying the fixed SPDX 2.3 header fields
    pub fn new(metadata: &DocumentMetadata, creators: Vec<String>) -> Self {
        Self {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            name: metadata.name().to_string(),
            document_namespace: metadata.namespace().to_string(),
            creation_info: CreationInfo {
                created: metadata.created().to_string(),
                creators,
                license_list_version: Some(LICENSE_LIST_VERSION.to_string()),
            },
            packages: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn find_package(&self, spdx_id: &str) -> Option<&SpdxPackage> {
        self.packages.iter().find(|p| p.spdx_id == spdx_id)
    }

    /// Targets of this document's DESCRIBES relationships
    pub fn described_ids(&self) -> Vec<&str> {
        self.relationships_of(&RelationshipType::Describes)
            .map(|r| r.related_spdx_element.as_str())
            .collect()
    }

    pub fn relationships_of<'a>(
        &'a self,
        kind: &'a RelationshipType,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| &r.relationship_type == kind)
    }
}
