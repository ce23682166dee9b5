//! Release kind: which grammar a version specifier is read with

use serde::{Deserialize, Serialize};
use std::fmt;

/// Project name under which platform releases are published
pub const CORE_PROJECT: &str = "drupal";

/// Whether a version specifier names a platform release or a project release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    /// Platform ("core") release, e.g. `7.22` or `8.x-dev`
    Core,
    /// Project ("contrib") release built against a platform branch, e.g. `7.x-1.2`
    #[default]
    Contrib,
}

impl ReleaseKind {
    /// Maps the boolean `is_core` flag to a release kind
    pub fn from_is_core(is_core: bool) -> Self {
        if is_core {
            ReleaseKind::Core
        } else {
            ReleaseKind::Contrib
        }
    }

    /// Returns the release kind implied by a project name
    pub fn for_project(name: &str) -> Self {
        Self::from_is_core(name.eq_ignore_ascii_case(CORE_PROJECT))
    }

    /// Returns the display name for this release kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ReleaseKind::Core => "core",
            ReleaseKind::Contrib => "contrib",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
