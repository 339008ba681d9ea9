use crate::sbom_generation::domain::{SpdxPackage, DOCUMENT_SPDX_ID};

/// Root identifiers written by the Ubuntu generator and by earlier merges
const KNOWN_ROOT_IDS: [&str; 2] = ["SPDXRef-Ubuntu-System", "SPDXRef-System"];

const ROOT_ID_SUFFIX: &str = "-System";

/// RootPackagePolicy decides which packages of an input document are the
/// synthetic root of an earlier generation and must not be carried into a
/// merge.
///
/// A package is a prior root when its id is a known root id, or when its
/// name contains "system" (any case) and its id ends in `-System` or is the
/// document id. The name heuristic can drop a real package such as
/// `systemd-System`; it is kept as is until a tighter rule is proven safe.
pub struct RootPackagePolicy;

impl RootPackagePolicy {
    pub fn is_prior_root(package: &SpdxPackage) -> bool {
        if KNOWN_ROOT_IDS.contains(&package.spdx_id.as_str()) {
            return true;
        }

        package.name.to_lowercase().contains("system")
            && (package.spdx_id.ends_with(ROOT_ID_SUFFIX) || package.spdx_id == DOCUMENT_SPDX_ID)
    }
}
