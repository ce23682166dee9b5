//! Structured form of a release version specifier
//!
//! A specifier names either a platform release or a project release
//! built against a platform branch:
//! - Core: `7`, `7.x`, `7.x-dev`, `7.22`, `8.0-beta1`
//! - Contrib: `7`, `7.x`, `7.x-1.2`, `7.x-1.0-beta1`, `7.x-2.x-dev`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed version specifier
///
/// Fields that the input did not determine are left empty; only
/// `drupal_version` is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionSpec {
    /// Full normalized version string, empty when unresolved
    pub version: String,
    /// Platform branch, always of the form `N.x`
    pub drupal_version: String,
    /// Releasable version, set together with `version`
    pub project_version: String,
    /// Major component of the release
    pub version_major: String,
    /// Patch component of the release
    pub version_patch: String,
    /// Stability qualifier such as `dev` or `beta1`
    pub version_extra: String,
}

impl VersionSpec {
    /// Creates a spec that only pins the platform branch
    pub fn branch(major: impl fmt::Display) -> Self {
        Self {
            drupal_version: format!("{}.x", major),
            ..Self::default()
        }
    }

    /// Sets the major component
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.version_major = major.into();
        self
    }

    /// Sets the patch component
    pub fn with_patch(mut self, patch: impl Into<String>) -> Self {
        self.version_patch = patch.into();
        self
    }

    /// Sets the stability qualifier
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.version_extra = extra.into();
        self
    }

    /// Sets the resolved version, which is also the releasable version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self.project_version = self.version.clone();
        self
    }

    /// Returns true if the input identified a specific release
    pub fn is_resolved(&self) -> bool {
        !self.version.is_empty()
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_resolved() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}", self.drupal_version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch() {
        let spec = VersionSpec::branch(7);
        assert_eq!(spec.drupal_version, "7.x");
        assert_eq!(spec.version, "");
        assert_eq!(spec.project_version, "");
        assert_eq!(spec.version_major, "");
        assert_eq!(spec.version_patch, "");
        assert_eq!(spec.version_extra, "");
        assert!(!spec.is_resolved());
    }

    #[test]
    fn test_builder() {
        let spec = VersionSpec::branch("5")
            .with_major("5")
            .with_patch("0")
            .with_extra("beta1")
            .with_version("5.0-beta1");
        assert_eq!(spec.drupal_version, "5.x");
        assert_eq!(spec.version, "5.0-beta1");
        assert_eq!(spec.project_version, "5.0-beta1");
        assert_eq!(spec.version_major, "5");
        assert_eq!(spec.version_patch, "0");
        assert_eq!(spec.version_extra, "beta1");
        assert!(spec.is_resolved());
    }

    #[test]
    fn test_display_trait() {
        let resolved = VersionSpec::branch(7).with_version("7.x-1.2");
        assert_eq!(format!("{}", resolved), "7.x-1.2");

        let unresolved = VersionSpec::branch(6);
        assert_eq!(format!("{}", unresolved), "6.x");
    }

    #[test]
    fn test_serde_field_names() {
        let spec = VersionSpec::branch(7).with_major("1").with_version("7.x-1.0");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["drupal_version"], "7.x");
        assert_eq!(json["project_version"], "7.x-1.0");
        assert_eq!(json["version_major"], "1");
        assert_eq!(json["version_patch"], "");
    }

    #[test]
    fn test_serde_version_spec() {
        let spec = VersionSpec::branch(7).with_extra("dev").with_version("7.x-dev");
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: VersionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }
}
