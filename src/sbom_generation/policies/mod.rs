mod cpe_repairer;
mod license_normalizer;
mod root_package_policy;

pub use cpe_repairer::CpeRepairer;
pub use license_normalizer::{
    LicenseNormalizer, Normalization, NormalizationRule, ShorthandRule,
    DISQUALIFYING_SUBSTRINGS, SHORTHAND_RULES,
};
pub use root_package_policy::RootPackagePolicy;
