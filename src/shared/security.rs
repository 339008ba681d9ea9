use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for SPDX documents read back for merging (256 MB).
/// sbomnix output for large closures runs into tens of megabytes.
pub const MAX_DOCUMENT_SIZE: u64 = 256 * 1024 * 1024;

/// Upper bound for a single debian/copyright file (16 MB)
pub const MAX_COPYRIGHT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Rejects a path that is itself a symbolic link
///
/// Uses `symlink_metadata()` so the link is inspected, not its target.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} on a symbolic link is not allowed", operation),
            hint: "pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` resolves to a regular file no larger than `max_size`
///
/// Symbolic links are followed, so a Nix `result` link into the store is
/// accepted as an input.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, dangling link, permissions)
/// - The path is not a regular file
/// - The file exceeds `max_size`
pub fn ensure_regular_file(path: &Path, description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    ensure_within_size_limit(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn ensure_within_size_limit(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes, maximum {} bytes)",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
