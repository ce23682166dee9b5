//! Regex grammar tables shared by the version and request parsers
//!
//! `D` is a platform major, `M.P` a project major and patch, `N.P` a
//! platform release. Qualifiers are alphanumeric (`dev`, `beta1`, `rc2`).
//! Digits are ASCII only: `\d` would also accept `٧` or `７`.

use regex::Regex;
use std::sync::LazyLock;

/// Bare platform major: `7`
pub(crate) static MAJOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)$").unwrap());

/// Platform branch with no project part: `7` or `7.x`
pub(crate) static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\.x)?$").unwrap());

/// Development snapshot of a branch: `7.x` or `7.x-dev`
pub(crate) static DEV_SNAPSHOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.x(?:-dev)?$").unwrap());

/// Explicit development snapshot: `7.x-dev`
pub(crate) static EXPLICIT_DEV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.x-dev$").unwrap());

/// Numbered release: `7.22` or `8.0-beta1`
pub(crate) static RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)(?:-([A-Za-z0-9]+))?$").unwrap());

/// Project release on a platform branch: `7.x-1.2` or `7.x-1.0-beta1`
pub(crate) static CONTRIB_RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| {
        Regex::new(r"^([0-9]+)\.x-([0-9]+)\.([0-9]+)(?:-([A-Za-z0-9]+))?$").unwrap()
    });

/// Project development branch: `7.x-2.x` or `7.x-2.x-dev`
pub(crate) static CONTRIB_DEV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.x-([0-9]+)\.x(?:-dev)?$").unwrap());

/// Returns true if `input` is a complete contrib specifier
///
/// Complete means it names both a platform branch and a project release
/// or development branch. A bare major or `D.x` on its own is not complete.
pub fn is_complete_contrib(input: &str) -> bool {
    CONTRIB_RELEASE_RE.is_match(input) || CONTRIB_DEV_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_re() {
        assert!(MAJOR_RE.is_match("7"));
        assert!(MAJOR_RE.is_match("10"));
        assert!(!MAJOR_RE.is_match("7.x"));
        assert!(!MAJOR_RE.is_match(""));
    }

    #[test]
    fn test_branch_re() {
        assert!(BRANCH_RE.is_match("7"));
        assert!(BRANCH_RE.is_match("7.x"));
        assert!(!BRANCH_RE.is_match("7.x-dev"));
        assert!(!BRANCH_RE.is_match("7.1"));
    }

    #[test]
    fn test_dev_snapshot_re() {
        assert!(DEV_SNAPSHOT_RE.is_match("5.x"));
        assert!(DEV_SNAPSHOT_RE.is_match("5.x-dev"));
        assert!(!DEV_SNAPSHOT_RE.is_match("5.x-beta1"));
        assert!(!DEV_SNAPSHOT_RE.is_match("5.x-dev-dev"));
    }

    #[test]
    fn test_release_re_captures() {
        let caps = RELEASE_RE.captures("5.0-beta1").unwrap();
        assert_eq!(&caps[1], "5");
        assert_eq!(&caps[2], "0");
        assert_eq!(&caps[3], "beta1");

        let caps = RELEASE_RE.captures("7.22").unwrap();
        assert!(caps.get(3).is_none());
    }

    #[test]
    fn test_contrib_release_re_captures() {
        let caps = CONTRIB_RELEASE_RE.captures("7.x-1.0-beta1").unwrap();
        assert_eq!(&caps[1], "7");
        assert_eq!(&caps[2], "1");
        assert_eq!(&caps[3], "0");
        assert_eq!(&caps[4], "beta1");
    }

    #[test]
    fn test_is_complete_contrib() {
        assert!(is_complete_contrib("7.x-1.2"));
        assert!(is_complete_contrib("7.x-1.0-beta1"));
        assert!(is_complete_contrib("7.x-2.x"));
        assert!(is_complete_contrib("7.x-2.x-dev"));
        assert!(!is_complete_contrib("7"));
        assert!(!is_complete_contrib("7.x"));
        assert!(!is_complete_contrib("6.22"));
        assert!(!is_complete_contrib("state-7.x-1.2"));
        assert!(!is_complete_contrib("7.x-1"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!MAJOR_RE.is_match("٧"));
        assert!(!BRANCH_RE.is_match("７.x"));
        assert!(!RELEASE_RE.is_match("７.０"));
        assert!(!DEV_SNAPSHOT_RE.is_match("٧.x-dev"));
        assert!(!is_complete_contrib("٧.x-١.٢"));
        assert!(!is_complete_contrib("7.x-١.x"));
    }
}
