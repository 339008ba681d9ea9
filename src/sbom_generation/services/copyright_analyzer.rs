use crate::sbom_generation::domain::{LicenseInfo, SpdxValue};
use crate::sbom_generation::policies::LicenseNormalizer;
use crate::shared::Result;
use regex::Regex;

/// Characters of the copyright file kept as the package's copyright text
pub const COPYRIGHT_PREVIEW_CHARS: usize = 200;

/// First line of a `License:` field. The value ends at a blank line, a line
/// starting with a letter, an indented continuation line or the end of the file.
const LICENSE_FIELD_PATTERN: &str =
    r"(?im)^License:[ \t]*(.+?)[ \t]*(?:\r?\n\r?\n|\r?\n[A-Za-z]|\r?\n[ \t]|\r?\n?\z)";

/// CopyrightAnalyzer service extracting license information from a Debian
/// `copyright` file
pub struct CopyrightAnalyzer {
    license_field: Regex,
    normalizer: LicenseNormalizer,
}

impl CopyrightAnalyzer {
    pub fn new(normalizer: LicenseNormalizer) -> Result<Self> {
        Ok(Self {
            license_field: Regex::new(LICENSE_FIELD_PATTERN)?,
            normalizer,
        })
    }

    /// Analyzes the contents of a copyright file; `None` means the package has
    /// no readable copyright file
    pub fn analyze(&self, contents: Option<&str>) -> LicenseInfo {
        let Some(text) = contents.filter(|text| !text.is_empty()) else {
            return LicenseInfo::unasserted();
        };

        LicenseInfo::new(self.extract_license(text), copyright_preview(text))
    }

    /// Raw value of the first `License:` field, before normalization
    pub fn license_field<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.license_field
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim())
    }

    fn extract_license(&self, text: &str) -> SpdxValue {
        match self.license_field(text) {
            Some(raw) => self.normalizer.normalize(raw),
            None => SpdxValue::Unasserted,
        }
    }
}

/// The whole text when short, otherwise its first characters plus "..."
pub fn copyright_preview(text: &str) -> SpdxValue {
    if text.is_empty() {
        return SpdxValue::Unasserted;
    }

    match text.char_indices().nth(COPYRIGHT_PREVIEW_CHARS) {
        Some((cut, _)) => SpdxValue::asserted(format!("{}...", &text[..cut])),
        None => SpdxValue::asserted(text),
    }
}
