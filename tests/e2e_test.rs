/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const UBUNTU_FIXTURE: &str = "tests/fixtures/ubuntu-sbom.spdx.json";
const NIX_FIXTURE: &str = "tests/fixtures/nix-sbom.spdx.json";
const MALFORMED_FIXTURE: &str = "tests/fixtures/malformed.json";

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("ubuntu-nix-sbom")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("merge"))
            .stdout(predicate::str::contains("combined"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("ubuntu-nix-sbom")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("ubuntu-nix-sbom").assert().code(2);
    }

    /// Exit code 2: Missing required flag, reported on a single line
    #[test]
    fn test_exit_code_merge_missing_nix() {
        let output = cargo_bin_cmd!("ubuntu-nix-sbom")
            .args(["merge", "--ubuntu", UBUNTU_FIXTURE])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.lines().count(), 1, "stderr was: {}", stderr);
        assert!(stderr.contains("--nix"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("ubuntu-nix-sbom")
            .args(["ubuntu", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - malformed input document
    #[test]
    fn test_exit_code_malformed_document() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("merged.json");

        cargo_bin_cmd!("ubuntu-nix-sbom")
            .args(["merge", "-a", UBUNTU_FIXTURE, "-b", MALFORMED_FIXTURE, "-o"])
            .arg(&output)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error:"))
            .stderr(predicate::str::contains("Failed to parse SBOM document"));

        assert!(!output.exists());
    }

    /// Exit code 1: Application error - missing input document
    #[test]
    fn test_exit_code_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("merged.json");

        cargo_bin_cmd!("ubuntu-nix-sbom")
            .args(["merge", "-a", "tests/fixtures/does-not-exist.json", "-b", NIX_FIXTURE, "-o"])
            .arg(&output)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read SBOM document"));

        assert!(!output.exists());
    }

    /// Exit code 1: Application error - Nix target does not exist
    #[test]
    fn test_exit_code_nix_missing_target() {
        let temp_dir = TempDir::new().unwrap();

        cargo_bin_cmd!("ubuntu-nix-sbom")
            .args(["nix", "/nonexistent/derivation.drv", "-o"])
            .arg(temp_dir.path().join("nix.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid target path"));
    }

    /// Exit code 1: Application error - invalid config file
    #[test]
    fn test_exit_code_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.yml");
        fs::write(&config, "command_timeout_secs: 0\n").unwrap();

        cargo_bin_cmd!("ubuntu-nix-sbom")
            .arg("--config")
            .arg(&config)
            .args(["merge", "-a", UBUNTU_FIXTURE, "-b", NIX_FIXTURE, "-o"])
            .arg(temp_dir.path().join("merged.json"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid config"));
    }
}

#[test]
fn test_merge_fixtures() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.json");

    cargo_bin_cmd!("ubuntu-nix-sbom")
        .args(["merge", "-a", UBUNTU_FIXTURE, "-b", NIX_FIXTURE, "-o"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Merged 2 Ubuntu packages and 3 Nix packages",
        ));

    let json = read_json(&output);
    assert_eq!(json["spdxVersion"], "SPDX-2.3");
    assert!(json["name"]
        .as_str()
        .unwrap()
        .starts_with("Ubuntu-Nix-System-SBOM-"));

    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 6);
    assert_eq!(packages[0]["SPDXID"], "SPDXRef-System");
    assert_eq!(packages[0]["name"], "Ubuntu-Nix-System");

    let ids: Vec<&str> = packages
        .iter()
        .map(|p| p["SPDXID"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"SPDXRef-Ubuntu-Package-1-bash"));
    assert!(ids.contains(&"SPDXRef-Nix-pg_cron-1.6.2"));
    assert!(!ids.contains(&"SPDXRef-Ubuntu-System"));

    let relationships = json["relationships"].as_array().unwrap();
    assert_eq!(relationships.len(), 6);
    assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
    assert_eq!(relationships[0]["relatedSpdxElement"], "SPDXRef-System");

    let creators = json["creationInfo"]["creators"].as_array().unwrap();
    assert_eq!(creators[0], "Tool: ubuntu-sbom-generator-1.0.0");
    assert_eq!(creators[1], "Tool: sbomnix");
    assert!(creators[2]
        .as_str()
        .unwrap()
        .starts_with("Tool: ubuntu-nix-sbom-merger-"));
}

#[test]
fn test_merge_repairs_nix_cpe() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.json");

    cargo_bin_cmd!("ubuntu-nix-sbom")
        .args(["merge", "--ubuntu", UBUNTU_FIXTURE, "--nix", NIX_FIXTURE, "--output"])
        .arg(&output)
        .assert()
        .success();

    let json = read_json(&output);
    let pg_cron = json["packages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "pg_cron")
        .unwrap();
    let refs = pg_cron["externalRefs"].as_array().unwrap();
    assert_eq!(
        refs[0]["referenceLocator"],
        "cpe:2.3:a:pg-cron:pg-cron:*:*:*:*:*:*:*:*"
    );
    assert_eq!(refs[1]["referenceLocator"], "pkg:nix/pg_cron@1.6.2");
}

#[test]
fn test_merge_output_is_pretty_printed() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.json");

    cargo_bin_cmd!("ubuntu-nix-sbom")
        .args(["merge", "-a", UBUNTU_FIXTURE, "-b", NIX_FIXTURE, "-o"])
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("{\n  \"spdxVersion\": \"SPDX-2.3\""));
    assert!(content.ends_with("}\n"));
}
