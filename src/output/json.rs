//! JSON output formatter for machine processing
//!
//! Records keep the field names of the parsed structures (`drupal_version`,
//! `version_major`, ...) so downstream lookups can consume them directly.

use crate::output::{OutputFormatter, RequestRecord, Verbosity, VersionRecord};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Quiet mode emits only the resolved values
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_versions(
        &self,
        records: &[VersionRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            let values: Vec<String> = records.iter().map(|r| r.spec.to_string()).collect();
            return self.write_json(&values, writer);
        }
        self.write_json(records, writer)
    }

    fn format_requests(
        &self,
        records: &[RequestRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            let requests: Vec<_> = records.iter().map(|r| &r.request).collect();
            return self.write_json(&requests, writer);
        }
        self.write_json(records, writer)
    }
}
