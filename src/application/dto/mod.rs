/// Data Transfer Objects for application layer
///
/// Requests carry what the CLI resolved (flags merged with config) into the
/// use cases, keeping the domain layer unaware of the command line.
mod sbom_request;

pub use sbom_request::{CombinedSbomRequest, ExternalSbomRequest, LocalSbomRequest, MergeRequest};
