use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading SPDX JSON documents
pub trait DocumentReader {
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// lacks a required field of the document shape.
    fn read_document(&self, path: &Path) -> Result<SpdxDocument>;
}
