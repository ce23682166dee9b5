//! Text output formatter for human-readable display
//!
//! Each input is printed as a header followed by aligned field/value
//! lines. Quiet mode prints one resolved value per line instead.

use crate::domain::VersionSpec;
use crate::output::{OutputFormatter, RequestRecord, Verbosity, VersionRecord};
use colored::Colorize;
use std::io::Write;

/// Width of the field label column
const LABEL_WIDTH: usize = 16;

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn write_field(writer: &mut dyn Write, label: &str, value: &str) -> std::io::Result<()> {
        let label = format!("{:<width$}", label, width = LABEL_WIDTH);
        if value.is_empty() {
            writeln!(writer, "  {} {}", label.cyan(), "-".dimmed())
        } else {
            writeln!(writer, "  {} {}", label.cyan(), value)
        }
    }

    fn write_spec(writer: &mut dyn Write, spec: &VersionSpec) -> std::io::Result<()> {
        Self::write_field(writer, "version", &spec.version)?;
        Self::write_field(writer, "drupal_version", &spec.drupal_version)?;
        Self::write_field(writer, "project_version", &spec.project_version)?;
        Self::write_field(writer, "version_major", &spec.version_major)?;
        Self::write_field(writer, "version_patch", &spec.version_patch)?;
        Self::write_field(writer, "version_extra", &spec.version_extra)
    }

    fn header(input: &str) -> String {
        if input.is_empty() {
            "(empty)".to_string()
        } else {
            input.to_string()
        }
    }

    fn write_summary(
        &self,
        writer: &mut dyn Write,
        total: usize,
        resolved: usize,
    ) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Verbose {
            return Ok(());
        }
        writeln!(
            writer,
            "{}",
            format!("{} parsed, {} resolved to a release", total, resolved).dimmed()
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format_versions(
        &self,
        records: &[VersionRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            for record in records {
                writeln!(writer, "{}", record.spec)?;
            }
            return Ok(());
        }

        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(
                writer,
                "{} {}",
                Self::header(&record.input).bold(),
                format!("({})", record.kind).dimmed()
            )?;
            Self::write_spec(writer, &record.spec)?;
        }

        let resolved = records.iter().filter(|r| r.spec.is_resolved()).count();
        self.write_summary(writer, records.len(), resolved)
    }

    fn format_requests(
        &self,
        records: &[RequestRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            for record in records {
                if record.request.has_version() {
                    writeln!(writer, "{} {}", record.request.name, record.request.version)?;
                } else {
                    writeln!(writer, "{}", record.request.name)?;
                }
            }
            return Ok(());
        }

        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "{}", Self::header(&record.input).bold())?;
            Self::write_field(writer, "name", &record.request.name)?;
            Self::write_field(writer, "version", &record.request.version)?;
            Self::write_field(writer, "drupal_version", &record.release.drupal_version)?;
            if self.verbosity == Verbosity::Verbose {
                let kind = record.request.release_kind();
                Self::write_field(writer, "release_kind", kind.display_name())?;
            }
        }

        let resolved = records.iter().filter(|r| r.request.has_version()).count();
        self.write_summary(writer, records.len(), resolved)
    }
}
