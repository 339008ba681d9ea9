use super::report_merge_counts;
use super::GenerateLocalSbomUseCase;
use crate::application::dto::CombinedSbomRequest;
use crate::ports::outbound::{
    CopyrightReader, DocumentReader, ExternalSbomGenerator, FileHasher, PackageDatabase,
    ProgressReporter,
};
use crate::sbom_generation::policies::CpeRepairer;
use crate::sbom_generation::services::{DocumentMerger, MergeOutcome};
use crate::shared::Result;

/// File name of the intermediate Nix document inside the scratch directory
const NIX_SCRATCH_FILE: &str = "nix-sbom.spdx.json";

/// GenerateCombinedSbomUseCase - Ubuntu generation, sbomnix and merge in one run
///
/// The Nix document only lives in a temporary directory that is removed when
/// the run ends, successful or not.
pub struct GenerateCombinedSbomUseCase<PD, CR, FH, PR, G, DR> {
    local: GenerateLocalSbomUseCase<PD, CR, FH, PR>,
    generator: G,
    document_reader: DR,
    merger: DocumentMerger,
}

impl<PD, CR, FH, PR, G, DR> GenerateCombinedSbomUseCase<PD, CR, FH, PR, G, DR>
where
    PD: PackageDatabase,
    CR: CopyrightReader,
    FH: FileHasher,
    PR: ProgressReporter,
    G: ExternalSbomGenerator,
    DR: DocumentReader,
{
    pub fn new(
        local: GenerateLocalSbomUseCase<PD, CR, FH, PR>,
        generator: G,
        document_reader: DR,
    ) -> Result<Self> {
        Ok(Self {
            local,
            generator,
            document_reader,
            merger: DocumentMerger::new(CpeRepairer::new()?),
        })
    }

    pub async fn execute(&self, request: CombinedSbomRequest) -> Result<MergeOutcome> {
        let progress_reporter = self.local.progress_reporter();

        // Step 1: Ubuntu document from dpkg
        let ubuntu = self.local.execute(request.local_request()).await?;

        // Step 2: Nix document from sbomnix, into a scratch directory
        let scratch = tempfile::tempdir()?;
        let nix_path = scratch.path().join(NIX_SCRATCH_FILE);
        progress_reporter.report(&format!(
            "Generating Nix SBOM for {}",
            request.nix_target.display()
        ));
        self.generator.generate(&request.nix_target, &nix_path).await?;
        let nix = self.document_reader.read_document(&nix_path)?;

        // Step 3: Merge
        let outcome = self
            .merger
            .merge(&DocumentMerger::generate_metadata(), ubuntu, nix);
        report_merge_counts(progress_reporter, &outcome);

        Ok(outcome)
    }
}
