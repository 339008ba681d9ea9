/// Formatter adapters for SBOM output
mod spdx_json_formatter;

pub use spdx_json_formatter::SpdxJsonFormatter;
