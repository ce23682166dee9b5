//! Orchestrator for coordinating a parse run
//!
//! This module provides:
//! - Input collection from arguments and `--file`
//! - Dispatch to the version or request parser
//! - Records ready for the output formatters

use crate::cli::{read_inputs, CliArgs, Command};
use crate::domain::{PlatformContext, ReleaseKind};
use crate::error::{AppError, IoError};
use crate::output::{OutputFormatter, RequestRecord, VersionRecord};
use crate::parser::{parse_request, parse_version};
use std::fs;
use std::io::Write;
use tracing::debug;

/// Orchestrator for a single invocation
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Platform defaults shared by every parse in this run
    ctx: PlatformContext,
}

/// Result of running the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorResult {
    /// Parsed version specifiers
    Versions(Vec<VersionRecord>),
    /// Split request slugs
    Requests(Vec<RequestRecord>),
}

impl OrchestratorResult {
    /// Write the records with the given formatter
    pub fn write(
        &self,
        formatter: &dyn OutputFormatter,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match self {
            OrchestratorResult::Versions(records) => formatter.format_versions(records, writer),
            OrchestratorResult::Requests(records) => formatter.format_requests(records, writer),
        }
    }
}

impl Orchestrator {
    /// Create a new orchestrator, rejecting invalid option combinations
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        args.validate()?;
        let ctx = args.platform_context();
        Ok(Self { args, ctx })
    }

    /// Platform context in effect for this run
    pub fn context(&self) -> &PlatformContext {
        &self.ctx
    }

    /// Collect inputs from arguments followed by the input file, if any
    pub fn collect_inputs(&self) -> Result<Vec<String>, AppError> {
        let mut inputs = self.args.inputs().to_vec();
        if let Some(ref path) = self.args.file {
            let contents = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
            let from_file = read_inputs(&contents);
            debug!(
                "read {} inputs from {}",
                from_file.len(),
                path.display()
            );
            inputs.extend(from_file);
        }
        Ok(inputs)
    }

    /// Parse every input
    pub fn run(&self) -> Result<OrchestratorResult, AppError> {
        let inputs = self.collect_inputs()?;

        let result = match self.args.command {
            Command::Version { .. } => {
                let kind = self.args.release_kind();
                OrchestratorResult::Versions(
                    inputs
                        .into_iter()
                        .map(|input| self.parse_version_record(input, kind))
                        .collect(),
                )
            }
            Command::Request { .. } => OrchestratorResult::Requests(
                inputs
                    .into_iter()
                    .map(|input| self.parse_request_record(input))
                    .collect(),
            ),
        };

        Ok(result)
    }

    fn parse_version_record(&self, input: String, kind: ReleaseKind) -> VersionRecord {
        let spec = parse_version(&input, kind, &self.ctx);
        VersionRecord { input, kind, spec }
    }

    fn parse_request_record(&self, input: String) -> RequestRecord {
        let request = parse_request(&input);
        let release = request.version_spec(&self.ctx);
        RequestRecord {
            input,
            request,
            release,
        }
    }
}
