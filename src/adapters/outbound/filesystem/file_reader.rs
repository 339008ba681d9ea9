use crate::ports::outbound::{CopyrightReader, DocumentReader};
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::error::SbomError;
use crate::shared::security::{
    ensure_regular_file, ensure_within_size_limit, MAX_COPYRIGHT_FILE_SIZE, MAX_DOCUMENT_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Where Debian packages install their copyright files
pub const DEFAULT_COPYRIGHT_DIR: &str = "/usr/share/doc";

/// FileSystemReader adapter for SPDX documents on disk
///
/// Follows symbolic links, rejects non-regular and oversized files before
/// reading, then parses the whole file as one SPDX JSON document.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<SpdxDocument> {
        let read_error = |details: String| SbomError::DocumentReadError {
            path: path.to_path_buf(),
            details,
        };

        ensure_regular_file(path, "SBOM document", MAX_DOCUMENT_SIZE)
            .map_err(|e| read_error(e.to_string()))?;
        let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// DebianCopyrightReader adapter reading `<doc dir>/<package>/copyright`
///
/// Doc directories are commonly symlinked to a sibling package's directory,
/// so links are followed here; only the size is bounded.
pub struct DebianCopyrightReader {
    doc_dir: PathBuf,
}

impl DebianCopyrightReader {
    pub fn new(doc_dir: PathBuf) -> Self {
        Self { doc_dir }
    }

    pub fn copyright_path(&self, package_name: &str) -> PathBuf {
        self.doc_dir.join(package_name).join("copyright")
    }
}

impl Default for DebianCopyrightReader {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_COPYRIGHT_DIR))
    }
}

impl CopyrightReader for DebianCopyrightReader {
    fn read_copyright(&self, package_name: &str) -> Result<String> {
        let path = self.copyright_path(package_name);
        let read_error = |details: String| SbomError::FileReadError {
            path: path.clone(),
            details,
        };

        let metadata = fs::metadata(&path).map_err(|e| read_error(e.to_string()))?;
        if !metadata.is_file() {
            return Err(read_error("not a regular file".to_string()).into());
        }
        ensure_within_size_limit(metadata.len(), &path, MAX_COPYRIGHT_FILE_SIZE)?;

        let bytes = fs::read(&path).map_err(|e| read_error(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
