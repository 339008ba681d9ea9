use super::metadata_generator::MetadataGenerator;
use super::spdx_id::tag_id;
use crate::sbom_generation::domain::{
    DocumentMetadata, Relationship, SpdxDocument, SpdxPackage, DOCUMENT_SPDX_ID,
};
use crate::sbom_generation::policies::{CpeRepairer, RootPackagePolicy};
use std::collections::HashSet;

pub const MERGED_ROOT_ID: &str = "SPDXRef-System";
pub const MERGED_ROOT_NAME: &str = "Ubuntu-Nix-System";
const MERGED_ROOT_DESCRIPTION: &str = "Combined Ubuntu and Nix package system";
const MERGED_DOCUMENT_PREFIX: &str = "Ubuntu-Nix-System-SBOM";
const MERGED_NAMESPACE_BASE: &str = "https://sbom.ubuntu-nix.system";
const MERGER_TOOL_NAME: &str = "ubuntu-nix-sbom-merger";

pub const UBUNTU_TAG: &str = "Ubuntu";
pub const NIX_TAG: &str = "Nix";

/// A merged document with the number of packages taken from each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub document: SpdxDocument,
    pub ubuntu_packages: usize,
    pub nix_packages: usize,
}

/// DocumentMerger service combining an Ubuntu document and a Nix document
/// under one new root package
///
/// Prior roots of both inputs are dropped, every other package is tagged with
/// its origin and attached to the new root. Relationships of the inputs are
/// not carried over. Nix CPE references go through the [`CpeRepairer`].
pub struct DocumentMerger {
    cpe_repairer: CpeRepairer,
}

impl DocumentMerger {
    pub fn new(cpe_repairer: CpeRepairer) -> Self {
        Self { cpe_repairer }
    }

    /// Fresh metadata for a merged document
    pub fn generate_metadata() -> DocumentMetadata {
        MetadataGenerator::generate(MERGED_DOCUMENT_PREFIX, MERGED_NAMESPACE_BASE)
    }

    pub fn merger_creator() -> String {
        format!("Tool: {}-{}", MERGER_TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    pub fn merge(
        &self,
        metadata: &DocumentMetadata,
        ubuntu: SpdxDocument,
        nix: SpdxDocument,
    ) -> MergeOutcome {
        let creators = Self::merge_creators(&ubuntu, &nix);
        let mut merged = SpdxDocument::new(metadata, creators);

        let mut root = SpdxPackage::unasserted(MERGED_ROOT_ID, MERGED_ROOT_NAME);
        root.description = Some(MERGED_ROOT_DESCRIPTION.to_string());
        merged.packages.push(root);
        merged
            .relationships
            .push(Relationship::describes(DOCUMENT_SPDX_ID, MERGED_ROOT_ID));

        let mut used_ids: HashSet<String> = HashSet::from([MERGED_ROOT_ID.to_string()]);

        let ubuntu_packages = Self::append_packages(
            &mut merged,
            &mut used_ids,
            ubuntu.packages,
            UBUNTU_TAG,
            |package| package,
        );
        let nix_packages = Self::append_packages(
            &mut merged,
            &mut used_ids,
            nix.packages,
            NIX_TAG,
            |package| self.repair_cpe_refs(package),
        );

        MergeOutcome {
            document: merged,
            ubuntu_packages,
            nix_packages,
        }
    }

    fn append_packages<F>(
        merged: &mut SpdxDocument,
        used_ids: &mut HashSet<String>,
        packages: Vec<SpdxPackage>,
        tag: &str,
        mut adjust: F,
    ) -> usize
    where
        F: FnMut(SpdxPackage) -> SpdxPackage,
    {
        let mut count = 0;
        for package in packages {
            if RootPackagePolicy::is_prior_root(&package) {
                continue;
            }

            let mut package = adjust(package);
            package.spdx_id = unique_id(tag_id(&package.spdx_id, tag), used_ids);

            merged
                .relationships
                .push(Relationship::contains(MERGED_ROOT_ID, package.spdx_id.clone()));
            merged.packages.push(package);
            count += 1;
        }
        count
    }

    fn repair_cpe_refs(&self, mut package: SpdxPackage) -> SpdxPackage {
        package.external_refs = package
            .external_refs
            .into_iter()
            .map(|reference| self.cpe_repairer.repair(reference))
            .collect();
        package
    }

    /// Creators of both inputs in first-seen order, then the merger itself
    fn merge_creators(ubuntu: &SpdxDocument, nix: &SpdxDocument) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut creators: Vec<String> = ubuntu
            .creation_info
            .creators
            .iter()
            .chain(nix.creation_info.creators.iter())
            .filter(|creator| seen.insert(creator.as_str()))
            .cloned()
            .collect();

        let merger = Self::merger_creator();
        if !creators.contains(&merger) {
            creators.push(merger);
        }
        creators
    }
}

/// Returns `id`, or `id-2`, `id-3`, ... when `id` is already taken
fn unique_id(id: String, used_ids: &mut HashSet<String>) -> String {
    if used_ids.insert(id.clone()) {
        return id;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", id, suffix);
        if used_ids.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
