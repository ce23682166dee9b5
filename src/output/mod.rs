//! Output formatting for parse results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::{ReleaseKind, Request, VersionSpec};
use serde::Serialize;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only the resolved value per input
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputFormat, verbosity: Verbosity) -> Self {
        Self { format, verbosity }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self { format, verbosity }
    }
}

/// A version specifier together with the input it was parsed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Raw input
    pub input: String,
    /// Grammar the input was read with
    pub kind: ReleaseKind,
    /// Parsed fields
    #[serde(flatten)]
    pub spec: VersionSpec,
}

/// A split request slug together with its parsed version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    /// Raw input
    pub input: String,
    /// Name and version split from the input
    #[serde(flatten)]
    pub request: Request,
    /// The version read with the grammar implied by the project name
    pub release: VersionSpec,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write parsed version specifiers
    fn format_versions(
        &self,
        records: &[VersionRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write split request slugs
    fn format_requests(
        &self,
        records: &[RequestRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create a formatter based on output configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.verbosity)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
    }
}
