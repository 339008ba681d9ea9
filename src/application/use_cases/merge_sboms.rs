use super::report_merge_counts;
use crate::application::dto::MergeRequest;
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::sbom_generation::policies::CpeRepairer;
use crate::sbom_generation::services::{DocumentMerger, MergeOutcome};
use crate::shared::Result;

/// MergeSbomsUseCase - Merges an Ubuntu document and a Nix document read from disk
///
/// Both inputs are loaded before merging, so a bad second file aborts the run
/// before any output exists.
pub struct MergeSbomsUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
    merger: DocumentMerger,
}

impl<DR, PR> MergeSbomsUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    pub fn new(document_reader: DR, progress_reporter: PR) -> Result<Self> {
        Ok(Self {
            document_reader,
            progress_reporter,
            merger: DocumentMerger::new(CpeRepairer::new()?),
        })
    }

    pub fn execute(&self, request: MergeRequest) -> Result<MergeOutcome> {
        let ubuntu = self.document_reader.read_document(&request.ubuntu_path)?;
        let nix = self.document_reader.read_document(&request.nix_path)?;

        let outcome = self
            .merger
            .merge(&DocumentMerger::generate_metadata(), ubuntu, nix);
        report_merge_counts(&self.progress_reporter, &outcome);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{
        DocumentMetadata, ExternalRef, Relationship, SpdxDocument, SpdxPackage, DOCUMENT_SPDX_ID,
    };
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct MockDocumentReader {
        documents: HashMap<PathBuf, SpdxDocument>,
    }

    impl MockDocumentReader {
        fn with(mut self, path: &str, document: SpdxDocument) -> Self {
            self.documents.insert(PathBuf::from(path), document);
            self
        }
    }

    impl DocumentReader for MockDocumentReader {
        fn read_document(&self, path: &Path) -> Result<SpdxDocument> {
            self.documents
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Failed to read SBOM document: {}", path.display()))
        }
    }

    #[derive(Default)]
    struct RecordingProgressReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingProgressReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn document(root: (&str, &str), packages: &[(&str, &str)]) -> SpdxDocument {
        let metadata = DocumentMetadata::new(
            "input".to_string(),
            "https://example.invalid/input".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
        );
        let mut doc = SpdxDocument::new(&metadata, vec!["Tool: input".to_string()]);
        doc.packages.push(SpdxPackage::unasserted(root.0, root.1));
        doc.relationships
            .push(Relationship::describes(DOCUMENT_SPDX_ID, root.0));
        for (id, name) in packages {
            doc.packages.push(SpdxPackage::unasserted(*id, *name));
        }
        doc
    }

    #[test]
    fn test_execute_reports_side_counts() {
        let ubuntu = document(
            ("SPDXRef-Ubuntu-System", "Ubuntu-System"),
            &[
                ("SPDXRef-Ubuntu-Package-1-bash", "bash"),
                ("SPDXRef-Ubuntu-Package-2-libc6", "libc6"),
            ],
        );
        let mut hello = SpdxPackage::unasserted("SPDXRef-hello", "hello");
        hello
            .external_refs
            .push(ExternalRef::cpe23("cpe:2.3:a:hello:hello:2.12:*:*:*:*:*:*:*"));
        let mut nix = document(("SPDXRef-hello-env", "hello-env"), &[]);
        nix.packages.push(hello);

        let use_case = MergeSbomsUseCase::new(
            MockDocumentReader::default()
                .with("ubuntu.json", ubuntu)
                .with("nix.json", nix),
            RecordingProgressReporter::default(),
        )
        .unwrap();

        let outcome = use_case
            .execute(MergeRequest::new(
                PathBuf::from("ubuntu.json"),
                PathBuf::from("nix.json"),
            ))
            .unwrap();

        assert_eq!(outcome.ubuntu_packages, 2);
        assert_eq!(outcome.nix_packages, 2);
        assert!(outcome
            .document
            .find_package("SPDXRef-Nix-hello")
            .is_some());
        assert_eq!(
            use_case.progress_reporter.messages.borrow().as_slice(),
            ["Merged 2 Ubuntu packages and 2 Nix packages"]
        );
    }

    #[test]
    fn test_execute_fails_when_second_document_is_missing() {
        let ubuntu = document(("SPDXRef-Ubuntu-System", "Ubuntu-System"), &[]);
        let use_case = MergeSbomsUseCase::new(
            MockDocumentReader::default().with("ubuntu.json", ubuntu),
            RecordingProgressReporter::default(),
        )
        .unwrap();

        let err = use_case
            .execute(MergeRequest::new(
                PathBuf::from("ubuntu.json"),
                PathBuf::from("missing.json"),
            ))
            .unwrap_err();

        assert!(err.to_string().contains("missing.json"));
        assert!(use_case.progress_reporter.messages.borrow().is_empty());
    }
}
