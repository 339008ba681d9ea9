mod copyright_analyzer;
mod document_assembler;
mod document_merger;
mod dpkg_output_parser;
mod metadata_generator;
mod package_digest;
pub mod spdx_id;

pub use copyright_analyzer::{copyright_preview, CopyrightAnalyzer, COPYRIGHT_PREVIEW_CHARS};
pub use document_assembler::{DocumentAssembler, SystemLayout, PROGRESS_INTERVAL};
pub use document_merger::{
    DocumentMerger, MergeOutcome, MERGED_ROOT_ID, MERGED_ROOT_NAME, NIX_TAG, UBUNTU_TAG,
};
pub use dpkg_output_parser::{DpkgOutputParser, DPKG_QUERY_FIELDS};
pub use metadata_generator::MetadataGenerator;
pub use package_digest::PackageDigest;
