use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The requested document was written
    Success = 0,
    /// Any unrecoverable error (subprocess failure, unreadable input, unwritable output, ...)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation and merging.
///
/// Messages stay on a single line: the CLI prints exactly one diagnostic line
/// before exiting.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to query installed packages with {command}: {details} (hint: this command needs a dpkg-based system)")]
    PackageQueryFailed { command: String, details: String },

    #[error("Invalid target path: {path}: {reason} (hint: pass an existing Nix derivation or store path)")]
    InvalidTargetPath { path: PathBuf, reason: String },

    #[error("External tool {tool} failed: {details} (hint: make sure {tool} is installed and on PATH, or set sbomnix_path in the config file)")]
    ExternalToolFailed { tool: String, details: String },

    #[error("Command {command} did not finish within {seconds}s (hint: raise command_timeout_secs in the config file)")]
    CommandTimedOut { command: String, seconds: u64 },

    #[error("Failed to read SBOM document: {path}: {details} (hint: check that the file exists and is readable)")]
    DocumentReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM document: {path}: {details} (hint: the file must be an SPDX 2.3 JSON document)")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}: {details} (hint: check that the directory exists and is writable)")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}: {reason} (hint: {hint})")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid config: {message}")]
    ConfigError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_package_query_failed_display() {
        let error = SbomError::PackageQueryFailed {
            command: "dpkg-query".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("dpkg-query"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_document_parse_error_display() {
        let error = SbomError::DocumentParseError {
            path: PathBuf::from("/tmp/nix-sbom.spdx.json"),
            details: "missing field `packages`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SBOM document"));
        assert!(display.contains("/tmp/nix-sbom.spdx.json"));
        assert!(display.contains("missing field `packages`"));
    }

    #[test]
    fn test_command_timed_out_display() {
        let error = SbomError::CommandTimedOut {
            command: "sbomnix".to_string(),
            seconds: 30,
        };
        assert!(format!("{}", error).contains("within 30s"));
    }

    #[test]
    fn test_all_messages_are_single_line() {
        let errors = vec![
            SbomError::InvalidTargetPath {
                path: PathBuf::from("/nix/store/missing"),
                reason: "does not exist".to_string(),
            },
            SbomError::ExternalToolFailed {
                tool: "sbomnix".to_string(),
                details: "exit status: 1".to_string(),
            },
            SbomError::FileWriteError {
                path: PathBuf::from("/readonly/out.json"),
                details: "Permission denied".to_string(),
            },
            SbomError::SecurityError {
                path: PathBuf::from("/tmp/link"),
                reason: "is a symbolic link".to_string(),
                hint: "write to a regular file".to_string(),
            },
            SbomError::ConfigError {
                message: "sbomnix_path must not be empty".to_string(),
            },
        ];

        for error in errors {
            assert!(!error.to_string().contains('\n'), "{}", error);
        }
    }
}
