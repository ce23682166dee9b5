//! A project request split into its name and optional version

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{PlatformContext, ReleaseKind, VersionSpec};
use crate::parser::parse_version;

/// Result of splitting a request slug such as `devel-7.x-1.2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Project name, never empty for non-empty input
    pub name: String,
    /// Trailing version specifier, empty when none was given
    pub version: String,
}

impl Request {
    /// Creates a new Request
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns true if the slug carried a version specifier
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }

    /// Returns the grammar the version should be read with
    pub fn release_kind(&self) -> ReleaseKind {
        ReleaseKind::for_project(&self.name)
    }

    /// Parses the captured version against the given platform context
    pub fn version_spec(&self, ctx: &PlatformContext) -> VersionSpec {
        parse_version(&self.version, self.release_kind(), ctx)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_version() {
            write!(f, "{}-{}", self.name, self.version)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_version() {
        let request = Request::new("devel", "7.x-1.2");
        assert_eq!(format!("{}", request), "devel-7.x-1.2");
    }

    #[test]
    fn test_display_without_version() {
        let request = Request::new("views", "");
        assert!(!request.has_version());
        assert_eq!(format!("{}", request), "views");
    }

    #[test]
    fn test_version_spec_contrib() {
        let spec = Request::new("devel", "7.x-1.2").version_spec(&PlatformContext::default());
        assert_eq!(spec.drupal_version, "7.x");
        assert_eq!(spec.version_major, "1");
        assert_eq!(spec.version_patch, "2");
    }

    #[test]
    fn test_version_spec_without_version_uses_context() {
        let spec = Request::new("views", "").version_spec(&PlatformContext::new(6));
        assert_eq!(spec.drupal_version, "6.x");
        assert!(!spec.is_resolved());
    }

    #[test]
    fn test_core_project_release_kind() {
        let request = Request::new("drupal", "");
        assert_eq!(request.release_kind(), ReleaseKind::Core);
        assert_eq!(Request::new("ctools", "").release_kind(), ReleaseKind::Contrib);
    }
}
