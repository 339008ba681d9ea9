use crate::shared::Result;

/// CopyrightReader port for a package's Debian copyright file
pub trait CopyrightReader {
    /// Reads the copyright file shipped by `package_name`
    ///
    /// # Errors
    /// Returns an error if the file is missing, too large or unreadable.
    /// Callers degrade the package's license and copyright to NOASSERTION.
    fn read_copyright(&self, package_name: &str) -> Result<String>;
}
