//! Read-only platform context consulted while parsing

use crate::error::ConfigError;

/// Platform major version assumed when nothing else selects one
pub const DEFAULT_MAJOR: u32 = 7;

/// Snapshot of the platform defaults a parse runs against
///
/// Parsers only read from it, so a single instance can be shared freely
/// between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformContext {
    default_major: u32,
    bootstrapped: bool,
}

impl Default for PlatformContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR)
    }
}

impl PlatformContext {
    /// Creates a context for the given platform major version
    pub fn new(default_major: u32) -> Self {
        Self {
            default_major,
            bootstrapped: false,
        }
    }

    /// Marks whether a platform instance has been bootstrapped
    pub fn bootstrapped(mut self, bootstrapped: bool) -> Self {
        self.bootstrapped = bootstrapped;
        self
    }

    /// Parses a major version string such as `"7"`
    pub fn parse_major(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::invalid_default_major(value));
        }
        trimmed
            .parse()
            .map(Self::new)
            .map_err(|_| ConfigError::invalid_default_major(value))
    }

    /// Returns the current platform major version
    pub fn default_major(&self) -> u32 {
        self.default_major
    }

    /// Returns the current platform branch, e.g. `"7.x"`
    pub fn default_branch(&self) -> String {
        format!("{}.x", self.default_major)
    }

    /// Returns true when a platform instance is already selected
    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }
}
