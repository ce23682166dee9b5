//! pm-request - Release version specifier and request slug parser
//!
//! This library turns the short identifiers used to request releases into
//! structured records:
//! - Version specifiers for platform ("core") releases: `7.22`, `8.x-dev`
//! - Version specifiers for project ("contrib") releases: `7.x-1.0-beta1`
//! - Request slugs combining a project name and a version: `devel-7.x-1.2`
//!
//! ```
//! use pm_request::domain::{PlatformContext, ReleaseKind};
//! use pm_request::parser::{parse_request, parse_version};
//!
//! let request = parse_request("devel-7.x-1.2");
//! assert_eq!(request.name, "devel");
//!
//! let spec = parse_version(&request.version, ReleaseKind::Contrib, &PlatformContext::default());
//! assert_eq!(spec.drupal_version, "7.x");
//! assert_eq!(spec.version_major, "1");
//! ```

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
