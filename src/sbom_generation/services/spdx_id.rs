use crate::sbom_generation::domain::SPDX_REF_PREFIX;

/// Replaces every character outside `[A-Za-z0-9.-]` with `-`
pub fn sanitize_id_fragment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// `SPDXRef-<system>-Package-<ordinal>-<sanitized name>`
pub fn package_id(system: &str, ordinal: usize, name: &str) -> String {
    format!(
        "{}{}-Package-{}-{}",
        SPDX_REF_PREFIX,
        system,
        ordinal,
        sanitize_id_fragment(name)
    )
}

/// `SPDXRef-<system>-System`
pub fn system_root_id(system: &str) -> String {
    format!("{}{}-System", SPDX_REF_PREFIX, system)
}

/// Inserts `<tag>-` after the `SPDXRef-` marker unless the id already carries it
pub fn tag_id(id: &str, tag: &str) -> String {
    let tagged_prefix = format!("{}{}-", SPDX_REF_PREFIX, tag);
    if id.starts_with(&tagged_prefix) {
        return id.to_string();
    }
    let rest = id.strip_prefix(SPDX_REF_PREFIX).unwrap_or(id);
    format!("{}{}", tagged_prefix, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_id_fragment() {
        assert_eq!(sanitize_id_fragment("libstdc++6"), "libstdc--6");
        assert_eq!(sanitize_id_fragment("python3.10-minimal"), "python3.10-minimal");
        assert_eq!(sanitize_id_fragment("lib32gcc_s1:i386"), "lib32gcc-s1-i386");
        assert_eq!(sanitize_id_fragment("caf\u{00e9}"), "caf-");
    }

    #[test]
    fn test_package_id() {
        assert_eq!(
            package_id("Ubuntu", 42, "libc6:amd64"),
            "SPDXRef-Ubuntu-Package-42-libc6-amd64"
        );
    }

    #[test]
    fn test_system_root_id() {
        assert_eq!(system_root_id("Ubuntu"), "SPDXRef-Ubuntu-System");
    }

    #[test]
    fn test_tag_id_inserts_tag() {
        assert_eq!(tag_id("SPDXRef-openssl-3.0.13", "Nix"), "SPDXRef-Nix-openssl-3.0.13");
    }

    #[test]
    fn test_tag_id_keeps_tagged_ids() {
        assert_eq!(
            tag_id("SPDXRef-Ubuntu-Package-1-bash", "Ubuntu"),
            "SPDXRef-Ubuntu-Package-1-bash"
        );
    }

    #[test]
    fn test_tag_id_without_marker() {
        assert_eq!(tag_id("bash", "Ubuntu"), "SPDXRef-Ubuntu-bash");
    }

    #[test]
    fn test_tag_prefix_must_end_with_hyphen() {
        assert_eq!(tag_id("SPDXRef-Nixpkgs-x", "Nix"), "SPDXRef-Nix-Nixpkgs-x");
    }
}
