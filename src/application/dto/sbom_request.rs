use std::path::PathBuf;

/// LocalSbomRequest - Request DTO for the dpkg-based Ubuntu document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSbomRequest {
    /// Hash the files of every package into a SHA256 package checksum
    pub include_files: bool,
    /// Draw per-package progress while assembling
    pub show_progress: bool,
}

impl LocalSbomRequest {
    pub fn new(include_files: bool, show_progress: bool) -> Self {
        Self {
            include_files,
            show_progress,
        }
    }
}

/// ExternalSbomRequest - Request DTO for delegating a Nix document to sbomnix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSbomRequest {
    /// Nix derivation or store path
    pub target: PathBuf,
    /// Where sbomnix writes its SPDX JSON
    pub output: PathBuf,
}

impl ExternalSbomRequest {
    pub fn new(target: PathBuf, output: PathBuf) -> Self {
        Self { target, output }
    }
}

/// MergeRequest - Request DTO for merging two existing documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub ubuntu_path: PathBuf,
    pub nix_path: PathBuf,
}

impl MergeRequest {
    pub fn new(ubuntu_path: PathBuf, nix_path: PathBuf) -> Self {
        Self {
            ubuntu_path,
            nix_path,
        }
    }
}

/// CombinedSbomRequest - Request DTO for generate-both-then-merge in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSbomRequest {
    pub nix_target: PathBuf,
    pub include_files: bool,
    pub show_progress: bool,
}

impl CombinedSbomRequest {
    pub fn new(nix_target: PathBuf, include_files: bool, show_progress: bool) -> Self {
        Self {
            nix_target,
            include_files,
            show_progress,
        }
    }

    /// The Ubuntu half of this request
    pub fn local_request(&self) -> LocalSbomRequest {
        LocalSbomRequest::new(self.include_files, self.show_progress)
    }
}
