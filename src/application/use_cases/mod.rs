/// Use cases module containing application business logic orchestration
mod generate_combined_sbom;
mod generate_external_sbom;
mod generate_local_sbom;
mod merge_sboms;

pub use generate_combined_sbom::GenerateCombinedSbomUseCase;
pub use generate_external_sbom::GenerateExternalSbomUseCase;
pub use generate_local_sbom::GenerateLocalSbomUseCase;
pub use merge_sboms::MergeSbomsUseCase;

use crate::ports::outbound::ProgressReporter;
use crate::sbom_generation::services::MergeOutcome;

fn report_merge_counts<PR: ProgressReporter>(progress_reporter: &PR, outcome: &MergeOutcome) {
    progress_reporter.report(&format!(
        "Merged {} Ubuntu packages and {} Nix packages",
        outcome.ubuntu_packages, outcome.nix_packages
    ));
}
