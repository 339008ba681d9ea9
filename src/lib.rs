//! ubuntu-nix-sbom - SPDX 2.3 SBOM generation for dpkg systems and Nix derivations
//!
//! This library generates Software Bill of Materials (SBOM) documents for the
//! packages installed through dpkg, delegates Nix derivations to `sbomnix`, and
//! merges both into a single document. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): SPDX model, license and CPE policies, document assembly
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ubuntu_nix_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case
//! let use_case = MergeSbomsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new())?;
//!
//! // Execute
//! let request = MergeRequest::new(
//!     PathBuf::from("ubuntu-sbom.spdx.json"),
//!     PathBuf::from("nix-sbom.spdx.json"),
//! );
//! let outcome = use_case.execute(request)?;
//!
//! // Format output
//! let output = SpdxJsonFormatter::new().format(&outcome.document)?;
//! FileSystemWriter::new(PathBuf::from("merged-sbom.spdx.json")).present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DebianCopyrightReader, FileSystemReader, FileSystemWriter, Sha256FileHasher,
    };
    pub use crate::adapters::outbound::formatters::SpdxJsonFormatter;
    pub use crate::adapters::outbound::process::{CommandRunner, DpkgClient, SbomnixRunner};
    pub use crate::application::dto::{
        CombinedSbomRequest, ExternalSbomRequest, LocalSbomRequest, MergeRequest,
    };
    pub use crate::application::use_cases::{
        GenerateCombinedSbomUseCase, GenerateExternalSbomUseCase, GenerateLocalSbomUseCase,
        MergeSbomsUseCase,
    };
    pub use crate::ports::outbound::{
        CopyrightReader, DocumentReader, ExternalSbomGenerator, FileHasher, OutputPresenter,
        PackageDatabase, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        ExternalRef, LicenseInfo, Relationship, RelationshipType, SpdxDocument, SpdxPackage,
        SpdxValue,
    };
    pub use crate::sbom_generation::policies::{CpeRepairer, LicenseNormalizer};
    pub use crate::sbom_generation::services::{DocumentAssembler, DocumentMerger, MergeOutcome};
    pub use crate::shared::Result;
}
