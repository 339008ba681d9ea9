/// ProgressReporter port for user feedback on long runs
///
/// Reporting is best effort: implementations must never fail or panic, and
/// nothing reported here may influence the generated documents.
pub trait ProgressReporter {
    /// Reports a status line such as "Found 1432 installed packages"
    fn report(&self, message: &str);

    /// Reports per-package progress
    ///
    /// # Arguments
    /// * `current` - 1-based ordinal of the package being processed
    /// * `total` - Number of packages
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
