use crate::application::dto::ExternalSbomRequest;
use crate::ports::outbound::{ExternalSbomGenerator, ProgressReporter};
use crate::shared::Result;

/// GenerateExternalSbomUseCase - Delegates the Nix document to an external generator
///
/// The generator writes its own output file; nothing is parsed or
/// post-processed here.
pub struct GenerateExternalSbomUseCase<G, PR> {
    generator: G,
    progress_reporter: PR,
}

impl<G, PR> GenerateExternalSbomUseCase<G, PR>
where
    G: ExternalSbomGenerator,
    PR: ProgressReporter,
{
    pub fn new(generator: G, progress_reporter: PR) -> Self {
        Self {
            generator,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: ExternalSbomRequest) -> Result<()> {
        self.progress_reporter.report(&format!(
            "Generating Nix SBOM for {}",
            request.target.display()
        ));

        self.generator
            .generate(&request.target, &request.output)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Output complete: {}",
            request.output.display()
        ));
        Ok(())
    }
}
