//! Core (platform release) version grammar
//!
//! Handles:
//! - Empty input: the context branch
//! - Bare major: `7`
//! - Development snapshots: `7.x`, `7.x-dev`
//! - Releases: `7.22`, `8.0-beta1`

use crate::domain::{PlatformContext, VersionSpec};
use crate::parser::patterns::{DEV_SNAPSHOT_RE, MAJOR_RE, RELEASE_RE};
use tracing::debug;

/// Parses a platform release specifier
pub(crate) fn parse(input: &str, ctx: &PlatformContext) -> VersionSpec {
    if input.is_empty() {
        debug!("core: empty specifier, using branch {}", ctx.default_branch());
        return VersionSpec::branch(ctx.default_major());
    }

    if let Some(caps) = MAJOR_RE.captures(input) {
        debug!(input, "core: bare major");
        return VersionSpec::branch(&caps[1]);
    }

    // `-dev` after `N.x` is optional, so both spellings normalize alike
    if let Some(caps) = DEV_SNAPSHOT_RE.captures(input) {
        let major = &caps[1];
        debug!(input, "core: development snapshot");
        return VersionSpec::branch(major)
            .with_major(major)
            .with_extra("dev")
            .with_version(format!("{}.x-dev", major));
    }

    if let Some(caps) = RELEASE_RE.captures(input) {
        let major = &caps[1];
        let extra = caps.get(3).map_or("", |m| m.as_str());
        debug!(input, "core: release");
        return VersionSpec::branch(major)
            .with_major(major)
            .with_patch(&caps[2])
            .with_extra(extra)
            .with_version(input);
    }

    debug!(input, "core: unrecognized specifier, using context branch");
    VersionSpec::branch(ctx.default_major())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_core(input: &str) -> VersionSpec {
        parse(input, &PlatformContext::default())
    }

    #[test]
    fn test_empty_uses_context() {
        let spec = parse("", &PlatformContext::new(8));
        assert_eq!(spec, VersionSpec::branch(8));
    }

    #[test]
    fn test_bare_major() {
        let spec = parse_core("5");
        assert_eq!(spec.drupal_version, "5.x");
        assert_eq!(spec.version, "");
        assert_eq!(spec.version_major, "");
        assert_eq!(spec.version_patch, "");
        assert_eq!(spec.version_extra, "");
    }

    #[test]
    fn test_dev_snapshot() {
        let spec = parse_core("5.x");
        assert_eq!(spec.version, "5.x-dev");
        assert_eq!(spec.project_version, "5.x-dev");
        assert_eq!(spec.version_major, "5");
        assert_eq!(spec.version_extra, "dev");
        assert_eq!(spec, parse_core("5.x-dev"));
    }

    #[test]
    fn test_release() {
        let spec = parse_core("5.0");
        assert_eq!(spec.version, "5.0");
        assert_eq!(spec.drupal_version, "5.x");
        assert_eq!(spec.version_major, "5");
        assert_eq!(spec.version_patch, "0");
        assert_eq!(spec.version_extra, "");
    }

    #[test]
    fn test_release_with_extra() {
        let spec = parse_core("8.0-rc2");
        assert_eq!(spec.version, "8.0-rc2");
        assert_eq!(spec.version_patch, "0");
        assert_eq!(spec.version_extra, "rc2");
    }

    #[test]
    fn test_unrecognized_uses_context() {
        assert_eq!(parse_core("latest"), VersionSpec::branch(7));
        assert_eq!(parse_core("5.x-beta1"), VersionSpec::branch(7));
        assert_eq!(parse_core("7.x-1.2"), VersionSpec::branch(7));
    }

    #[test]
    fn test_non_ascii_digits_use_context() {
        assert_eq!(parse_core("٧"), VersionSpec::branch(7));
        assert_eq!(parse_core("７.０"), VersionSpec::branch(7));
    }
}
