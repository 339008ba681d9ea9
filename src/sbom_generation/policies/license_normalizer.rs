use crate::sbom_generation::domain::SpdxValue;
use crate::shared::Result;
use regex::Regex;

/// One shorthand rule: a lowercase key and the identifier it maps to.
/// `None` maps the key to NOASSERTION.
pub type ShorthandRule = (&'static str, Option<&'static str>);

/// Inputs longer than this are treated as license prose
const MAX_IDENTIFIER_LEN: usize = 50;

/// SPDX license expression: identifiers joined by AND, OR or WITH
const LICENSE_EXPRESSION_PATTERN: &str =
    r"^[A-Za-z0-9.\-]+(\s+(AND|OR|WITH)\s+[A-Za-z0-9.\-]+)*$";

/// Shorthand tokens found in Debian copyright files, most specific first.
///
/// The canonical `-only` / `-or-later` / `N-Clause` keys sit before their
/// bare prefixes so an already-canonical identifier maps to itself.
pub static SHORTHAND_RULES: &[ShorthandRule] = &[
    ("gpl-2.0-or-later", Some("GPL-2.0-or-later")),
    ("gpl-2.0+", Some("GPL-2.0-or-later")),
    ("gpl-2.0-only", Some("GPL-2.0-only")),
    ("gpl-2+", Some("GPL-2.0-or-later")),
    ("gpl-2", Some("GPL-2.0-only")),
    ("gpl-3.0-or-later", Some("GPL-3.0-or-later")),
    ("gpl-3.0+", Some("GPL-3.0-or-later")),
    ("gpl-3.0-only", Some("GPL-3.0-only")),
    ("gpl-3+", Some("GPL-3.0-or-later")),
    ("gpl-3", Some("GPL-3.0-only")),
    ("lgpl-2.1-or-later", Some("LGPL-2.1-or-later")),
    ("lgpl-2.1-only", Some("LGPL-2.1-only")),
    ("lgpl-2.1+", Some("LGPL-2.1-or-later")),
    ("lgpl-2.1", Some("LGPL-2.1-only")),
    ("lgpl-2.0-or-later", Some("LGPL-2.0-or-later")),
    ("lgpl-2.0+", Some("LGPL-2.0-or-later")),
    ("lgpl-2.0-only", Some("LGPL-2.0-only")),
    ("lgpl-2+", Some("LGPL-2.0-or-later")),
    ("lgpl-2", Some("LGPL-2.0-only")),
    ("lgpl-3.0-or-later", Some("LGPL-3.0-or-later")),
    ("lgpl-3.0+", Some("LGPL-3.0-or-later")),
    ("lgpl-3.0-only", Some("LGPL-3.0-only")),
    ("lgpl-3+", Some("LGPL-3.0-or-later")),
    ("lgpl-3", Some("LGPL-3.0-only")),
    ("apache-2", Some("Apache-2.0")),
    ("apache", None),
    ("bsd-2-clause", Some("BSD-2-Clause")),
    ("bsd-3-clause", Some("BSD-3-Clause")),
    ("bsd-4-clause", Some("BSD-4-Clause")),
    ("bsd", Some("BSD-3-Clause")),
    ("mit/x11", Some("MIT")),
    ("mit-1", Some("MIT")),
    ("mit-style", Some("MIT")),
    ("expat", Some("MIT")),
    ("psf", Some("Python-2.0")),
    ("public-domain", None),
    ("openldap-2.8", None),
    ("hylafax", None),
    ("ubuntu-font-licence-1.0", Some("Ubuntu-Font-1.0")),
    ("go", None),
    ("epl-1", Some("EPL-1.0")),
    ("epl-2", Some("EPL-2.0")),
    ("dom4j", None),
    ("fastcgi", None),
    ("other", None),
    ("eclipse-public-license-v1.0", Some("EPL-1.0")),
    ("edl-1.0", Some("BSD-3-Clause")),
    ("nrl-2-clause", None),
    ("tidy", None),
    ("purdue", None),
    ("mpl-2", Some("MPL-2.0")),
];

/// Substrings that mark copyright prose rather than an identifier
pub static DISQUALIFYING_SUBSTRINGS: &[&str] = &[
    "Copyright",
    "copyright",
    "Permission is hereby",
    "The files",
    "Formerly,",
    "build-aux",
    "Portions",
    "free software",
    "<",
    ">",
    "'",
    ",",
];

/// Which rule decided a normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationRule {
    Empty,
    Exact,
    Prefix,
    Expression,
    Disqualified,
    TooLong,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub value: SpdxValue,
    pub rule: NormalizationRule,
}

/// LicenseNormalizer policy mapping free-text `License:` fields to SPDX
/// license expressions.
///
/// Precedence: empty input, exact shorthand, shorthand prefix (first rule
/// wins), SPDX expression grammar, disqualifying prose, length. Anything
/// left over becomes NOASSERTION. The result is always NOASSERTION or a
/// grammar-conforming expression without any disqualifying substring.
#[derive(Debug, Clone)]
pub struct LicenseNormalizer {
    rules: &'static [ShorthandRule],
    disqualifiers: &'static [&'static str],
    expression: Regex,
}

impl LicenseNormalizer {
    /// # Arguments
    /// * `rules` - Ordered shorthand table with lowercase keys
    /// * `disqualifiers` - Case-sensitive substrings that reject an input
    pub fn new(
        rules: &'static [ShorthandRule],
        disqualifiers: &'static [&'static str],
    ) -> Result<Self> {
        Ok(Self {
            rules,
            disqualifiers,
            expression: Regex::new(LICENSE_EXPRESSION_PATTERN)?,
        })
    }

    /// Normalizer over the shipped shorthand and disqualifier tables
    pub fn builtin() -> Result<Self> {
        Self::new(SHORTHAND_RULES, DISQUALIFYING_SUBSTRINGS)
    }

    /// Whether `license` conforms to the SPDX expression grammar
    pub fn is_expression(&self, license: &str) -> bool {
        self.expression.is_match(license)
    }

    pub fn normalize(&self, raw: &str) -> SpdxValue {
        self.explain(raw).value
    }

    /// Normalizes `raw` and reports the rule that produced the result
    pub fn explain(&self, raw: &str) -> Normalization {
        let license = raw.trim();
        if license.is_empty() {
            return Self::unasserted(NormalizationRule::Empty);
        }

        let lower = license.to_lowercase();

        if let Some((_, mapped)) = self.rules.iter().find(|(key, _)| *key == lower) {
            return Self::mapped(*mapped, NormalizationRule::Exact);
        }

        if let Some((_, mapped)) = self.rules.iter().find(|(key, _)| lower.starts_with(key)) {
            return Self::mapped(*mapped, NormalizationRule::Prefix);
        }

        let disqualified = self.is_disqualified(license);

        if self.is_expression(license) && !disqualified {
            return Normalization {
                value: SpdxValue::asserted(license),
                rule: NormalizationRule::Expression,
            };
        }

        if disqualified {
            return Self::unasserted(NormalizationRule::Disqualified);
        }

        if license.chars().count() > MAX_IDENTIFIER_LEN {
            return Self::unasserted(NormalizationRule::TooLong);
        }

        Self::unasserted(NormalizationRule::Unrecognized)
    }

    fn is_disqualified(&self, license: &str) -> bool {
        self.disqualifiers
            .iter()
            .any(|pattern| license.contains(pattern))
    }

    fn mapped(mapped: Option<&'static str>, rule: NormalizationRule) -> Normalization {
        Normalization {
            value: mapped.map(SpdxValue::asserted).unwrap_or_default(),
            rule,
        }
    }

    fn unasserted(rule: NormalizationRule) -> Normalization {
        Normalization {
            value: SpdxValue::Unasserted,
            rule,
        }
    }
}
