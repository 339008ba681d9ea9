/// Mock implementations for testing
mod mock_copyright_reader;
mod mock_document_reader;
mod mock_file_hasher;
mod mock_package_database;
mod mock_progress_reporter;
mod mock_sbom_generator;

pub use mock_copyright_reader::MockCopyrightReader;
pub use mock_document_reader::MockDocumentReader;
pub use mock_file_hasher::MockFileHasher;
pub use mock_package_database::MockPackageDatabase;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_generator::MockSbomGenerator;
