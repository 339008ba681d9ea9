pub mod license_info;
pub mod package;
pub mod relationship;
pub mod sbom_metadata;
pub mod spdx_document;
pub mod spdx_package;
pub mod spdx_value;

pub use license_info::LicenseInfo;
pub use package::{InstalledPackage, PackageRecord};
pub use relationship::{Relationship, RelationshipType};
pub use sbom_metadata::DocumentMetadata;
pub use spdx_document::{
    CreationInfo, SpdxDocument, DATA_LICENSE, DOCUMENT_SPDX_ID, LICENSE_LIST_VERSION,
    SPDX_REF_PREFIX, SPDX_VERSION,
};
pub use spdx_package::{Checksum, ExternalRef, SpdxPackage, VerificationCode};
pub use spdx_value::{SpdxValue, NOASSERTION};
