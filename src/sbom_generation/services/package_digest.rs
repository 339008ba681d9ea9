use sha2::{Digest, Sha256};

/// PackageDigest accumulates the per-file SHA-256 digests of one package
///
/// The package checksum is the SHA-256 of the lowercase hex digests of its
/// files, concatenated in listing order.
#[derive(Default)]
pub struct PackageDigest {
    hasher: Sha256,
    files: usize,
}

impl PackageDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the hex digest of one file
    pub fn add_file_digest(&mut self, hex_digest: &str) {
        self.hasher.update(hex_digest.as_bytes());
        self.files += 1;
    }

    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Hex digest of the package, or `None` when no file was added
    pub fn finish(self) -> Option<String> {
        if self.files == 0 {
            return None;
        }
        Some(hex::encode(self.hasher.finalize()))
    }
}
