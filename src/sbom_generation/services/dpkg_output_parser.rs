use crate::sbom_generation::domain::InstalledPackage;

/// Fields requested from dpkg-query, in this order
pub const DPKG_QUERY_FIELDS: [&str; 7] = [
    "Package",
    "Version",
    "Architecture",
    "Status",
    "Maintainer",
    "Homepage",
    "Description",
];

/// A status containing this marks an installed package
const INSTALLED_MARKER: &str = "installed";

/// DpkgOutputParser service for the text printed by `dpkg-query` and `dpkg -L`
///
/// Pure string processing; running the commands is the job of the
/// package database adapter.
pub struct DpkgOutputParser;

impl DpkgOutputParser {
    /// The `-f=` format string matching [`DPKG_QUERY_FIELDS`]
    pub fn query_format() -> String {
        let fields: Vec<String> = DPKG_QUERY_FIELDS
            .iter()
            .map(|field| format!("${{{}}}", field))
            .collect();
        format!("{}\n", fields.join("\t"))
    }

    /// Parses tab-separated dpkg-query output into installed packages
    ///
    /// A line is accepted when it has at least 7 fields and its status field
    /// contains "installed". Continuation lines of multi-line descriptions
    /// carry no tabs and are skipped with the rest.
    pub fn parse_installed_packages(output: &str) -> Vec<InstalledPackage> {
        output.lines().filter_map(Self::parse_line).collect()
    }

    fn parse_line(line: &str) -> Option<InstalledPackage> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < DPKG_QUERY_FIELDS.len() || !fields[3].contains(INSTALLED_MARKER) {
            return None;
        }

        Some(InstalledPackage::new(
            fields[0].to_string(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            fields[4].to_string(),
            fields[5].to_string(),
            fields[6].to_string(),
        ))
    }

    /// Paths from `dpkg -L` output, without blank lines and directory entries
    pub fn parse_file_list(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter(|line| !line.is_empty() && !line.ends_with('/'))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_format() {
        assert_eq!(
            DpkgOutputParser::query_format(),
            "${Package}\t${Version}\t${Architecture}\t${Status}\t${Maintainer}\t${Homepage}\t${Description}\n"
        );
    }

    #[test]
    fn test_parse_installed_packages() {
        let output = "bash\t5.1-6ubuntu1\tamd64\tinstall ok installed\tUbuntu Developers <ubuntu-devel-discuss@lists.ubuntu.com>\thttp://tiswww.case.edu/php/chet/bash/bashtop.html\tGNU Bourne Again SHell\n\
                      coreutils\t8.32-4.1ubuntu1\tamd64\tinstall ok installed\tUbuntu Developers\t(none)\tGNU core utilities\n";

        let packages = DpkgOutputParser::parse_installed_packages(output);

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name(), "bash");
        assert_eq!(packages[0].version(), "5.1-6ubuntu1");
        assert_eq!(packages[0].architecture(), "amd64");
        assert_eq!(packages[0].description(), "GNU Bourne Again SHell");
        assert_eq!(packages[1].name(), "coreutils");
        assert_eq!(packages[1].homepage(), None);
    }

    #[test]
    fn test_skips_packages_that_are_not_installed() {
        let output = "oldpkg\t1.0\tamd64\tdeinstall ok config-files\tx\t\tremoved\n\
                      newpkg\t2.0\tall\thold ok installed\tx\t\tkept\n";

        let packages = DpkgOutputParser::parse_installed_packages(output);

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name(), "newpkg");
    }

    #[test]
    fn test_skips_short_and_continuation_lines() {
        let output = "short\t1.0\tamd64\tinstall ok installed\n\
                      \x20This is a continuation of a long description\n\
                      \n\
                      zlib1g\t1:1.2.11\tamd64\tinstall ok installed\t\t\tcompression library\n";

        let packages = DpkgOutputParser::parse_installed_packages(output);

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name(), "zlib1g");
        assert_eq!(packages[0].maintainer(), None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let output = "pkg\t1\tamd64\tinstall ok installed\tm\th\tdesc\textra\n";
        let packages = DpkgOutputParser::parse_installed_packages(output);
        assert_eq!(packages[0].description(), "desc");
    }

    #[test]
    fn test_parse_file_list() {
        let output = "/.\n/usr\n/usr/bin/\n/usr/bin/bash\n\n/usr/share/doc/bash/copyright\n";

        let files = DpkgOutputParser::parse_file_list(output);

        assert_eq!(
            files,
            vec!["/.", "/usr", "/usr/bin/bash", "/usr/share/doc/bash/copyright"]
        );
    }
}
