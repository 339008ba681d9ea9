use crate::application::dto::LocalSbomRequest;
use crate::ports::outbound::{CopyrightReader, FileHasher, PackageDatabase, ProgressReporter};
use crate::sbom_generation::domain::{InstalledPackage, LicenseInfo, PackageRecord, SpdxDocument};
use crate::sbom_generation::policies::LicenseNormalizer;
use crate::sbom_generation::services::{
    CopyrightAnalyzer, DocumentAssembler, DpkgOutputParser, PackageDigest, SystemLayout,
};
use crate::shared::Result;
use std::path::Path;

/// GenerateLocalSbomUseCase - Builds the Ubuntu document from the dpkg database
///
/// Packages are processed one at a time in dpkg-query order. Per-package
/// data failures (missing copyright file, unreadable files) degrade to
/// NOASSERTION or an omitted checksum; only a failed package query aborts.
///
/// # Type Parameters
/// * `PD` - PackageDatabase implementation
/// * `CR` - CopyrightReader implementation
/// * `FH` - FileHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLocalSbomUseCase<PD, CR, FH, PR> {
    package_database: PD,
    copyright_reader: CR,
    file_hasher: FH,
    progress_reporter: PR,
    copyright_analyzer: CopyrightAnalyzer,
    assembler: DocumentAssembler,
}

impl<PD, CR, FH, PR> GenerateLocalSbomUseCase<PD, CR, FH, PR>
where
    PD: PackageDatabase,
    CR: CopyrightReader,
    FH: FileHasher,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLocalSbomUseCase with injected dependencies
    pub fn new(
        package_database: PD,
        copyright_reader: CR,
        file_hasher: FH,
        progress_reporter: PR,
    ) -> Result<Self> {
        Ok(Self {
            package_database,
            copyright_reader,
            file_hasher,
            progress_reporter,
            copyright_analyzer: CopyrightAnalyzer::new(LicenseNormalizer::builtin()?)?,
            assembler: DocumentAssembler::new(SystemLayout::ubuntu()),
        })
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the local SBOM generation use case
    ///
    /// # Returns
    /// The assembled Ubuntu document with fresh metadata
    pub async fn execute(&self, request: LocalSbomRequest) -> Result<SpdxDocument> {
        // Step 1: Query the package database
        let packages = self.query_installed_packages().await?;

        // Step 2: Collect license, copyright and checksum data per package
        let mut records = Vec::with_capacity(packages.len());
        for package in packages {
            let license_info = self.license_info(package.name());
            let sha256 = if request.include_files {
                self.package_checksum(package.name()).await
            } else {
                None
            };
            records.push(PackageRecord::new(package, license_info, sha256));
        }

        // Step 3: Assemble the document
        let metadata = self.assembler.layout().generate_metadata();
        let document = if request.show_progress {
            self.assembler
                .assemble_with_progress(&metadata, &records, |current, total| {
                    self.progress_reporter.report_progress(current, total, None)
                })
        } else {
            self.assembler.assemble(&metadata, &records)
        };

        self.progress_reporter.report_completion(&format!(
            "Assembled Ubuntu SBOM with {} packages",
            records.len()
        ));

        Ok(document)
    }

    async fn query_installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        let output = self.package_database.query_installed().await?;
        let packages = DpkgOutputParser::parse_installed_packages(&output);

        self.progress_reporter
            .report(&format!("Found {} installed packages", packages.len()));

        Ok(packages)
    }

    fn license_info(&self, package_name: &str) -> LicenseInfo {
        let contents = self.copyright_reader.read_copyright(package_name).ok();
        self.copyright_analyzer.analyze(contents.as_deref())
    }

    /// SHA-256 over the file digests of the package, in `dpkg -L` order
    ///
    /// Files that cannot be hashed (directories, unreadable paths) are
    /// skipped. `None` when the listing fails or nothing was hashed.
    async fn package_checksum(&self, package_name: &str) -> Option<String> {
        let listing = self
            .package_database
            .list_package_files(package_name)
            .await
            .ok()?;

        let mut digest = PackageDigest::new();
        for path in DpkgOutputParser::parse_file_list(&listing) {
            if let Ok(file_digest) = self.file_hasher.sha256_hex(Path::new(path)) {
                digest.add_file_digest(&file_digest);
            }
        }
        digest.finish()
    }
}
