/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (dpkg, sbomnix, file system, console).
pub mod copyright_reader;
pub mod document_reader;
pub mod external_sbom_generator;
pub mod file_hasher;
pub mod formatter;
pub mod output_presenter;
pub mod package_database;
pub mod progress_reporter;

pub use copyright_reader::CopyrightReader;
pub use document_reader::DocumentReader;
pub use external_sbom_generator::ExternalSbomGenerator;
pub use file_hasher::FileHasher;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use package_database::PackageDatabase;
pub use progress_reporter::ProgressReporter;
