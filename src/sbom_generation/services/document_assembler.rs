use super::metadata_generator::MetadataGenerator;
use super::spdx_id::{package_id, system_root_id};
use crate::sbom_generation::domain::{
    Checksum, DocumentMetadata, ExternalRef, PackageRecord, Relationship, SpdxDocument,
    SpdxPackage, DOCUMENT_SPDX_ID,
};

/// Progress is reported for ordinals 1, 101, 201, ...
pub const PROGRESS_INTERVAL: usize = 100;

const SUPPLIER_PREFIX: &str = "Organization: ";

/// Naming scheme of one generated system document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemLayout {
    system: &'static str,
    purl_distro: &'static str,
    document_name_prefix: &'static str,
    namespace_base: &'static str,
    tool_name: &'static str,
}

impl SystemLayout {
    pub fn ubuntu() -> Self {
        Self {
            system: "Ubuntu",
            purl_distro: "ubuntu",
            document_name_prefix: "Ubuntu-System-SBOM",
            namespace_base: "https://sbom.ubuntu.system",
            tool_name: "ubuntu-sbom-generator",
        }
    }

    pub fn system(&self) -> &str {
        self.system
    }

    pub fn root_id(&self) -> String {
        system_root_id(self.system)
    }

    pub fn root_name(&self) -> String {
        format!("{}-System", self.system)
    }

    pub fn creator(&self) -> String {
        format!("Tool: {}-{}", self.tool_name, env!("CARGO_PKG_VERSION"))
    }

    /// Fresh metadata for a document of this layout
    pub fn generate_metadata(&self) -> DocumentMetadata {
        MetadataGenerator::generate(self.document_name_prefix, self.namespace_base)
    }

    /// `pkg:deb/<distro>/<name>@<version>?arch=<arch>`
    pub fn purl(&self, name: &str, version: &str, architecture: &str) -> String {
        format!(
            "pkg:deb/{}/{}@{}?arch={}",
            self.purl_distro,
            urlencoding::encode(name),
            urlencoding::encode(version),
            architecture
        )
    }
}

/// DocumentAssembler service building a system document from package records
///
/// The root package comes first, followed by one package per record in input
/// order. Each record adds a CONTAINS edge from the root; a single DESCRIBES
/// edge from the document to the root closes the relationship list.
pub struct DocumentAssembler {
    layout: SystemLayout,
}

impl DocumentAssembler {
    pub fn new(layout: SystemLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &SystemLayout {
        &self.layout
    }

    pub fn assemble(&self, metadata: &DocumentMetadata, records: &[PackageRecord]) -> SpdxDocument {
        self.assemble_with_progress(metadata, records, |_, _| {})
    }

    /// Same as [`assemble`](Self::assemble), calling `on_progress(ordinal, total)`
    /// every [`PROGRESS_INTERVAL`] packages
    pub fn assemble_with_progress<F>(
        &self,
        metadata: &DocumentMetadata,
        records: &[PackageRecord],
        mut on_progress: F,
    ) -> SpdxDocument
    where
        F: FnMut(usize, usize),
    {
        let root_id = self.layout.root_id();
        let total = records.len();

        let mut document = SpdxDocument::new(metadata, vec![self.layout.creator()]);
        document.packages.reserve(total + 1);
        document.relationships.reserve(total + 1);
        document
            .packages
            .push(SpdxPackage::unasserted(root_id.clone(), self.layout.root_name()));

        for (idx, record) in records.iter().enumerate() {
            let ordinal = idx + 1;
            if idx % PROGRESS_INTERVAL == 0 {
                on_progress(ordinal, total);
            }

            let package = self.to_spdx_package(record, ordinal);
            document
                .relationships
                .push(Relationship::contains(root_id.clone(), package.spdx_id.clone()));
            document.packages.push(package);
        }

        document
            .relationships
            .push(Relationship::describes(DOCUMENT_SPDX_ID, root_id));

        document
    }

    fn to_spdx_package(&self, record: &PackageRecord, ordinal: usize) -> SpdxPackage {
        let installed = record.package();
        let license = record.license_info().license().clone();

        let mut package = SpdxPackage::unasserted(
            package_id(self.layout.system(), ordinal, installed.name()),
            installed.name(),
        );
        package.version_info = Some(installed.version().to_string());
        package.license_concluded = license.clone();
        package.license_declared = license;
        package.copyright_text = record.license_info().copyright().clone();
        package.description = Some(installed.description().to_string());
        package.home_page = installed.homepage().map(str::to_string);
        package.supplier = installed
            .maintainer()
            .map(|maintainer| format!("{}{}", SUPPLIER_PREFIX, maintainer));
        package.external_refs = vec![ExternalRef::purl(self.layout.purl(
            installed.name(),
            installed.version(),
            installed.architecture(),
        ))];
        if let Some(digest) = record.sha256() {
            package.checksums = vec![Checksum::sha256(digest)];
        }

        package
    }
}
