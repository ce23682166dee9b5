//! Application error types using thiserror
//!
//! Parsing itself never fails: malformed specifiers degrade to empty fields.
//! The errors here belong to the surrounding command-line surface:
//! - ConfigError: Invalid platform context or conflicting CLI options
//! - IoError: Reading input files and writing results

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Default major version is not a plain integer
    #[error("invalid default major version '{value}': expected a number like '7'")]
    InvalidDefaultMajor { value: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Neither inputs nor an input file were given
    #[error("no inputs given: pass them as arguments or with --file")]
    MissingInput,
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Input file not found
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read input file
    #[error("failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write results
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new InvalidDefaultMajor error
    pub fn invalid_default_major(value: impl Into<String>) -> Self {
        ConfigError::InvalidDefaultMajor {
            value: value.into(),
        }
    }

    /// Creates a new ConflictingOptions error
    pub fn conflicting_options(message: impl Into<String>) -> Self {
        ConfigError::ConflictingOptions {
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        IoError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping a missing file to NotFound
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        IoError::ReadError { path, source }
    }

    /// Creates a new WriteError
    pub fn write_error(source: std::io::Error) -> Self {
        IoError::WriteError { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_default_major() {
        let err = ConfigError::invalid_default_major("seven");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid default major version"));
        assert!(msg.contains("seven"));
    }

    #[test]
    fn test_config_error_conflicting_options() {
        let err = ConfigError::conflicting_options("--quiet and --verbose cannot be used together");
        let msg = format!("{}", err);
        assert!(msg.contains("conflicting options"));
        assert!(msg.contains("--quiet"));
    }

    #[test]
    fn test_config_error_missing_input() {
        let msg = format!("{}", ConfigError::MissingInput);
        assert!(msg.contains("--file"));
    }

    #[test]
    fn test_io_error_not_found() {
        let err = IoError::not_found("/path/to/requests.txt");
        let msg = format!("{}", err);
        assert!(msg.contains("input file not found"));
        assert!(msg.contains("requests.txt"));
    }

    #[test]
    fn test_io_error_read_error_maps_missing_file() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IoError::read_error("/missing.txt", source);
        assert!(matches!(err, IoError::NotFound { .. }));
    }

    #[test]
    fn test_io_error_read_error() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IoError::read_error("/protected.txt", source);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read input file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_error_write_error() {
        let source = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = IoError::write_error(source);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write output"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::invalid_default_major("x").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid default major version"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let app_err: AppError = IoError::not_found("/missing").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("input file not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = IoError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
