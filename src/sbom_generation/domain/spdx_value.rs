use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire token SPDX uses for "no claim is made about this field"
pub const NOASSERTION: &str = "NOASSERTION";

/// SpdxValue - a license, copyright or download-location field
///
/// `Unasserted` is the NOASSERTION sentinel. It only becomes the literal token
/// at the serde boundary, so "unknown" can never be confused with a value that
/// happens to read NOASSERTION deep inside the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SpdxValue {
    #[default]
    Unasserted,
    Asserted(String),
}

impl SpdxValue {
    pub fn asserted(value: impl Into<String>) -> Self {
        Self::Asserted(value.into())
    }

    pub fn is_asserted(&self) -> bool {
        matches!(self, Self::Asserted(_))
    }

    /// The asserted text, or None for the sentinel
    pub fn as_asserted(&self) -> Option<&str> {
        match self {
            Self::Unasserted => None,
            Self::Asserted(value) => Some(value),
        }
    }

    /// The wire representation
    pub fn as_str(&self) -> &str {
        self.as_asserted().unwrap_or(NOASSERTION)
    }
}

impl From<String> for SpdxValue {
    fn from(value: String) -> Self {
        if value == NOASSERTION {
            Self::Unasserted
        } else {
            Self::Asserted(value)
        }
    }
}

impl From<&str> for SpdxValue {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for SpdxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SpdxValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SpdxValue {
    /// `null` is read as the sentinel; foreign tools are not consistent about it
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(SpdxValue::from).unwrap_or_default())
    }
}
