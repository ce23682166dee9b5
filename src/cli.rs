//! CLI argument parsing module for pm-request

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{PlatformContext, ReleaseKind, DEFAULT_MAJOR};
use crate::error::ConfigError;

/// Parse a platform major version such as `7`
fn parse_default_major(s: &str) -> Result<u32, String> {
    PlatformContext::parse_major(s)
        .map(|ctx| ctx.default_major())
        .map_err(|e| e.to_string())
}

/// Parse Drupal release version specifiers and request slugs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pm-request",
    version,
    about = "Parse release version specifiers and request slugs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Platform major version used when the input names none
    #[arg(
        long,
        global = true,
        env = "PM_DEFAULT_MAJOR",
        default_value_t = DEFAULT_MAJOR,
        value_parser = parse_default_major
    )]
    pub default_major: u32,

    /// Treat the platform as bootstrapped, so bare project versions bind to its branch
    #[arg(long, global = true)]
    pub bootstrapped: bool,

    /// Read additional inputs from a file, one per line
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output, including parser decisions on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - print only the resolved value per input
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse version specifiers such as `7.x-1.2` or `8.0-beta1`
    Version {
        /// Read inputs with the core (platform release) grammar
        #[arg(long)]
        core: bool,

        /// Version specifiers to parse
        inputs: Vec<String>,
    },

    /// Split request slugs such as `devel-7.x-1.2` into name and version
    Request {
        /// Request slugs to split
        inputs: Vec<String>,
    },
}

impl CliArgs {
    /// Check for option combinations clap does not reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::conflicting_options(
                "--quiet and --verbose cannot be used together",
            ));
        }
        if self.inputs().is_empty() && self.file.is_none() {
            return Err(ConfigError::MissingInput);
        }
        Ok(())
    }

    /// Build the platform context described by the arguments
    pub fn platform_context(&self) -> PlatformContext {
        PlatformContext::new(self.default_major).bootstrapped(self.bootstrapped)
    }

    /// Inputs given on the command line
    pub fn inputs(&self) -> &[String] {
        match &self.command {
            Command::Version { inputs, .. } | Command::Request { inputs } => inputs,
        }
    }

    /// Grammar for the `version` subcommand
    pub fn release_kind(&self) -> ReleaseKind {
        match self.command {
            Command::Version { core, .. } => ReleaseKind::from_is_core(core),
            Command::Request { .. } => ReleaseKind::Contrib,
        }
    }
}

/// Split input file contents into entries, skipping blank lines and `#` comments
pub fn read_inputs(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
