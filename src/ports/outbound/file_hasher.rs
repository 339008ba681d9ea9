use crate::shared::Result;
use std::path::Path;

/// FileHasher port computing content digests of installed files
pub trait FileHasher {
    /// Lowercase hex SHA-256 of the file at `path`
    ///
    /// # Errors
    /// Returns an error for directories, missing files and read failures.
    fn sha256_hex(&self, path: &Path) -> Result<String>;
}
