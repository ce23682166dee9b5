//! Core domain models for pm-request
//!
//! This module contains the value types produced and consumed by the parsers:
//! - Release kind selecting the core or contrib grammar
//! - Platform context supplying the default branch
//! - Parsed version specifiers
//! - Split request slugs

mod platform;
mod release_kind;
mod request;
mod version_spec;

pub use platform::{PlatformContext, DEFAULT_MAJOR};
pub use release_kind::{ReleaseKind, CORE_PROJECT};
pub use request::Request;
pub use version_spec::VersionSpec;
