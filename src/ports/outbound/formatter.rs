use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing a finished document
pub trait SbomFormatter {
    /// Formats `document` into the text written to the output file
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument) -> Result<String>;
}
