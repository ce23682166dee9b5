//! Contrib (project release) version grammar
//!
//! Handles:
//! - Branch only: empty, `7`, `7.x`
//! - Releases: `7.x-1.2`, `7.x-1.0-beta1`
//! - Development branches: `7.x-2.x`, `7.x-2.x-dev`
//!
//! Anything else is read with the core grammar to pick the platform
//! branch, leaving the project fields empty. Without a bootstrapped
//! platform there is no way to tell `6.22` apart from a core release.

use crate::domain::{PlatformContext, VersionSpec};
use crate::parser::core_version;
use crate::parser::patterns::{
    BRANCH_RE, CONTRIB_DEV_RE, CONTRIB_RELEASE_RE, EXPLICIT_DEV_RE, RELEASE_RE,
};
use tracing::debug;

/// Parses a project release specifier
pub(crate) fn parse(input: &str, ctx: &PlatformContext) -> VersionSpec {
    if input.is_empty() {
        debug!("contrib: empty specifier, using branch {}", ctx.default_branch());
        return VersionSpec::branch(ctx.default_major());
    }

    if let Some(caps) = CONTRIB_RELEASE_RE.captures(input) {
        let extra = caps.get(4).map_or("", |m| m.as_str());
        debug!(input, "contrib: release");
        return VersionSpec::branch(&caps[1])
            .with_major(&caps[2])
            .with_patch(&caps[3])
            .with_extra(extra)
            .with_version(input);
    }

    if let Some(caps) = CONTRIB_DEV_RE.captures(input) {
        let (drupal, major) = (&caps[1], &caps[2]);
        debug!(input, "contrib: development branch");
        return VersionSpec::branch(drupal)
            .with_major(major)
            .with_extra("dev")
            .with_version(format!("{}.x-{}.x-dev", drupal, major));
    }

    if let Some(caps) = BRANCH_RE.captures(input) {
        debug!(input, "contrib: platform branch only");
        return VersionSpec::branch(&caps[1]);
    }

    if ctx.is_bootstrapped() {
        if let Some(spec) = parse_project_part(input, ctx) {
            return spec;
        }
    }

    debug!(input, "contrib: no project part, reading as core version");
    let core = core_version::parse(input, ctx);
    VersionSpec {
        drupal_version: core.drupal_version,
        ..VersionSpec::default()
    }
}

/// Reads an un-prefixed `M.P[-EXTRA]` or `M.x-dev` as a project version
/// for the bootstrapped platform branch.
fn parse_project_part(input: &str, ctx: &PlatformContext) -> Option<VersionSpec> {
    let drupal = ctx.default_major();

    if let Some(caps) = RELEASE_RE.captures(input) {
        let extra = caps.get(3).map_or("", |m| m.as_str());
        debug!(input, "contrib: project release on bootstrapped branch");
        return Some(
            VersionSpec::branch(drupal)
                .with_major(&caps[1])
                .with_patch(&caps[2])
                .with_extra(extra)
                .with_version(format!("{}.x-{}", drupal, input)),
        );
    }

    let caps = EXPLICIT_DEV_RE.captures(input)?;
    debug!(input, "contrib: project development branch on bootstrapped branch");
    Some(
        VersionSpec::branch(drupal)
            .with_major(&caps[1])
            .with_extra("dev")
            .with_version(format!("{}.x-{}.x-dev", drupal, &caps[1])),
    )
}
