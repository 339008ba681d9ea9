use crate::ports::outbound::FileHasher;
use crate::shared::error::SbomError;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Sha256FileHasher adapter streaming file contents through SHA-256
pub struct Sha256FileHasher;

impl Sha256FileHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256FileHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHasher for Sha256FileHasher {
    fn sha256_hex(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| SbomError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        // `dpkg -L` lists directories without a trailing slash too
        let metadata = fs::metadata(path).map_err(|e| read_error(e.to_string()))?;
        if !metadata.is_file() {
            return Err(read_error("not a regular file".to_string()).into());
        }

        let mut file = File::open(path).map_err(|e| read_error(e.to_string()))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| read_error(e.to_string()))?;

        Ok(hex::encode(hasher.finalize()))
    }
}
