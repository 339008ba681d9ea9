use crate::sbom_generation::domain::ExternalRef;
use crate::shared::Result;
use regex::Regex;

const WILDCARD: &str = "*";

/// One vendor/product/version/... component of a CPE 2.3 formatted string
const COMPONENT: &str = r##"(?:(?:\?*|\*?)(?:[a-zA-Z0-9\-._]|\\[\\*?!"#$%&'()+,/:;<=>@\[\]^`{|}~])+(?:\?*|\*?)|[*\-])"##;

const LANGUAGE: &str = r"(?:[a-zA-Z]{2,3}(?:-(?:[a-zA-Z]{2}|[0-9]{3}))?|[*\-])";

/// CpeRepairer policy for `cpe23Type` references produced by sbomnix.
///
/// sbomnix tends to emit `cpe:2.3:a:<product>:<product>::*:...` with an empty
/// version. References that fail the CPE 2.3 formatted-string grammar are
/// rebuilt from their part, vendor, product and version; the result always
/// validates unless the input was too short to rebuild.
#[derive(Debug, Clone)]
pub struct CpeRepairer {
    grammar: Regex,
}

impl CpeRepairer {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"^cpe:2\.3:[aho*\-](?::{c}){{5}}:{l}(?::{c}){{4}}$",
            c = COMPONENT,
            l = LANGUAGE
        );
        Ok(Self {
            grammar: Regex::new(&pattern)?,
        })
    }

    pub fn is_valid(&self, cpe: &str) -> bool {
        self.grammar.is_match(cpe)
    }

    /// Repairs a `cpe23Type` reference; any other reference is returned as is
    pub fn repair(&self, reference: ExternalRef) -> ExternalRef {
        if !reference.is_cpe23() {
            return reference;
        }
        let locator = self.repair_locator(&reference.reference_locator);
        ExternalRef {
            reference_locator: locator,
            ..reference
        }
    }

    pub fn repair_locator(&self, cpe: &str) -> String {
        if self.is_valid(cpe) {
            return cpe.to_string();
        }

        let parts: Vec<&str> = cpe.split(':').collect();
        if parts.len() < 4 {
            return cpe.to_string();
        }

        let part = sanitize_part(parts[2]);
        let version = version_component(parts.get(5).copied());
        let (vendor, product, version) = match parts.get(4) {
            Some(product) if *product == parts[3] => (parts[3], parts[3], version),
            Some(product) => (parts[3], *product, version),
            None => (WILDCARD, parts[3], WILDCARD),
        };

        format!(
            "cpe:2.3:{}:{}:{}:{}:*:*:*:*:*:*:*",
            part,
            sanitize_component(vendor),
            sanitize_component(product),
            sanitize_component(version)
        )
    }
}

fn version_component(raw: Option<&str>) -> &str {
    raw.filter(|v| !v.is_empty() && *v != WILDCARD)
        .unwrap_or(WILDCARD)
}

/// Part code `a`, `h`, `o` or a wildcard; CPE 2.2 URIs carry a leading `/`
fn sanitize_part(raw: &str) -> String {
    let part = raw.trim_start_matches('/').to_ascii_lowercase();
    match part.as_str() {
        "a" | "h" | "o" | "*" | "-" => part,
        _ => WILDCARD.to_string(),
    }
}

fn sanitize_component(raw: &str) -> String {
    let component = raw.replace('_', "-");
    if component.is_empty() || component == WILDCARD {
        return WILDCARD.to_string();
    }

    // '*' is only legal as a whole component or at the edges, so it goes too
    let cleaned: String = component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        WILDCARD.to_string()
    } else {
        trimmed.to_string()
    }
}
