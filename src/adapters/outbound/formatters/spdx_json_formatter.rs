use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxJsonFormatter adapter producing SPDX 2.3 JSON
///
/// Pretty-printed with two-space indentation and a trailing newline.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        let mut json = serde_json::to_string_pretty(document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize SPDX document: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
