//! Command-line surface, declarative only.

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_UBUNTU_OUTPUT: &str = "ubuntu-sbom.spdx.json";
pub const DEFAULT_NIX_OUTPUT: &str = "nix-sbom.spdx.json";
pub const DEFAULT_MERGED_OUTPUT: &str = "merged-sbom.spdx.json";

/// Generate SPDX 2.3 SBOMs for dpkg-managed systems and Nix derivations
#[derive(Parser, Debug)]
#[command(name = "ubuntu-nix-sbom", version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML config file (default: ./ubuntu-nix-sbom.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an SBOM of the packages installed with dpkg
    #[command(visible_alias = "generate-local")]
    Ubuntu(UbuntuArgs),

    /// Generate an SBOM of a Nix derivation with sbomnix
    #[command(visible_alias = "generate-external")]
    Nix(NixArgs),

    /// Merge an Ubuntu SBOM and a Nix SBOM into one document
    Merge(MergeArgs),

    /// Generate both SBOMs and merge them in one run
    Combined(CombinedArgs),
}

#[derive(Args, Debug)]
pub struct UbuntuArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_UBUNTU_OUTPUT)]
    pub output: PathBuf,

    /// Compute a SHA256 checksum over the files of each package (slow)
    #[arg(long)]
    pub include_files: bool,

    #[command(flatten)]
    pub progress: ProgressFlags,
}

#[derive(Args, Debug)]
pub struct NixArgs {
    /// Nix derivation or store path
    pub target: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_NIX_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Ubuntu SBOM to merge
    #[arg(short = 'a', long = "ubuntu", value_name = "PATH")]
    pub ubuntu: PathBuf,

    /// Nix SBOM to merge
    #[arg(short = 'b', long = "nix", value_name = "PATH")]
    pub nix: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_MERGED_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CombinedArgs {
    /// Nix derivation or store path
    #[arg(long, value_name = "PATH")]
    pub nix_target: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_MERGED_OUTPUT)]
    pub output: PathBuf,

    /// Compute a SHA256 checksum over the files of each package (slow)
    #[arg(long)]
    pub include_files: bool,

    #[command(flatten)]
    pub progress: ProgressFlags,
}

/// `--progress` / `--no-progress`; the last one given wins
#[derive(Args, Debug, Default)]
pub struct ProgressFlags {
    /// Show per-package progress
    #[arg(long, overrides_with = "no_progress")]
    progress: bool,

    /// Hide per-package progress
    #[arg(long, overrides_with = "progress")]
    no_progress: bool,
}

impl ProgressFlags {
    /// `None` when neither flag was given
    pub fn resolve(&self) -> Option<bool> {
        match (self.progress, self.no_progress) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Whether an argument error should be printed in full (help, version,
/// and help shown for a bare invocation)
pub fn prints_in_full(error: &clap::Error) -> bool {
    !error.use_stderr() || error.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
}

/// Collapses an argument error to one line, dropping the tip and usage blocks
pub fn diagnostic_line(error: &clap::Error) -> String {
    error
        .render()
        .to_string()
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
