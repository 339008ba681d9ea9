use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship kind between two SPDX elements
///
/// Only `Contains` and `Describes` are ever produced here. Any other kind read
/// from a foreign document is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    Contains,
    Describes,
    Other(String),
}

impl RelationshipType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Contains => "CONTAINS",
            Self::Describes => "DESCRIBES",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for RelationshipType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "CONTAINS" => Self::Contains,
            "DESCRIBES" => Self::Describes,
            _ => Self::Other(kind),
        }
    }
}

impl From<RelationshipType> for String {
    fn from(kind: RelationshipType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed, typed edge between two SPDX identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: String,
    pub related_spdx_element: String,
    pub relationship_type: RelationshipType,
}

impl Relationship {
    pub fn contains(container: impl Into<String>, contained: impl Into<String>) -> Self {
        Self {
            spdx_element_id: container.into(),
            related_spdx_element: contained.into(),
            relationship_type: RelationshipType::Contains,
        }
    }

    pub fn describes(document: impl Into<String>, described: impl Into<String>) -> Self {
        Self {
            spdx_element_id: document.into(),
            related_spdx_element: described.into(),
            relationship_type: RelationshipType::Describes,
        }
    }
}
