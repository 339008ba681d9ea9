use crate::sbom_generation::domain::DocumentMetadata;
use chrono::{Local, SecondsFormat, Utc};
use uuid::Uuid;

/// MetadataGenerator service for the per-run parts of a document header
///
/// Every call yields a fresh namespace, so two documents generated in the
/// same run never share one.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates document metadata
    ///
    /// # Arguments
    /// * `name_prefix` - Document name before the date, e.g. `Ubuntu-System-SBOM`
    /// * `namespace_base` - URI the random namespace id is appended to
    ///
    /// # Returns
    /// DocumentMetadata named `<prefix>-<YYYY-MM-DD>` with namespace
    /// `<base>/<uuid v4>` and a UTC RFC 3339 creation time
    pub fn generate(name_prefix: &str, namespace_base: &str) -> DocumentMetadata {
        let name = format!("{}-{}", name_prefix, Local::now().format("%Y-%m-%d"));
        let namespace = format!("{}/{}", namespace_base.trim_end_matches('/'), Uuid::new_v4());
        let created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        DocumentMetadata::new(name, namespace, created)
    }
}
