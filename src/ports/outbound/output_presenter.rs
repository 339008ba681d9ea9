use crate::shared::Result;

/// OutputPresenter port for the destination of a formatted document
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory does not exist
    /// - The destination is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn present(&self, content: &str) -> Result<()>;
}
