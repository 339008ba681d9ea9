//! Configuration file support for ubuntu-nix-sbom.
//!
//! Provides YAML-based configuration through `ubuntu-nix-sbom.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags take precedence over every value set here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "ubuntu-nix-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Program run for Nix documents, looked up on PATH when relative.
    pub sbomnix_path: Option<PathBuf>,
    /// Directory holding `<package>/copyright` files.
    pub copyright_dir: Option<PathBuf>,
    pub include_files: Option<bool>,
    pub progress: Option<bool>,
    /// Upper bound for each external command; unbounded when absent.
    pub command_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {} (hint: check that the file exists and is readable)",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {} (hint: ensure the file contains valid YAML syntax)",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let paths = [
        ("sbomnix_path", &config.sbomnix_path),
        ("copyright_dir", &config.copyright_dir),
    ];
    for (field, path) in paths {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(SbomError::ConfigError {
                message: format!("{} must not be empty", field),
            }
            .into());
        }
    }

    if config.command_timeout_secs == Some(0) {
        return Err(SbomError::ConfigError {
            message: "command_timeout_secs must be greater than 0 (omit it to disable the timeout)"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
