//! Version specifier and request slug parsers
//!
//! This module provides:
//! - Core grammar for platform releases (`7.22`, `8.x-dev`)
//! - Contrib grammar for project releases (`7.x-1.2`)
//! - Request slug splitting (`devel-7.x-1.2`)
//!
//! Parsing never fails. Parts of the input no production matches are
//! left empty in the result, and callers treat empty fields as
//! unconstrained.

mod contrib_version;
mod core_version;
mod patterns;
mod request;

pub use patterns::is_complete_contrib;
pub use request::parse_request;

use crate::domain::{PlatformContext, ReleaseKind, VersionSpec};

/// Parses a version specifier with the grammar selected by `kind`
pub fn parse_version(input: &str, kind: ReleaseKind, ctx: &PlatformContext) -> VersionSpec {
    let input = input.trim();
    match kind {
        ReleaseKind::Core => core_version::parse(input, ctx),
        ReleaseKind::Contrib => contrib_version::parse(input, ctx),
    }
}
