//! Request slug splitter
//!
//! A slug is a project name optionally followed by `-` and a complete
//! contrib specifier: `devel`, `devel-7.x-1.2`, `field-conditional-state-7.x-1.2`.

use crate::domain::Request;
use crate::parser::patterns::is_complete_contrib;
use tracing::debug;

const DELIMITER: char = '-';

/// Splits a request slug into project name and version
///
/// The longest trailing run after a `-` that forms a complete contrib
/// specifier becomes the version. Names may contain `-` and digits
/// themselves, so a partial suffix such as `7` or `7.x` never splits.
pub fn parse_request(input: &str) -> Request {
    let trimmed = input.trim();

    // Earlier delimiters give longer suffixes, so the first hit is the longest
    for (idx, _) in trimmed.match_indices(DELIMITER) {
        let (name, version) = (&trimmed[..idx], &trimmed[idx + DELIMITER.len_utf8()..]);
        if !name.is_empty() && is_complete_contrib(version) {
            debug!(input = trimmed, name, version, "request: split on version suffix");
            return Request::new(name, version);
        }
    }

    // Whitespace-only input is kept whole so the name stays non-empty
    let name = if trimmed.is_empty() { input } else { trimmed };
    debug!(input = name, "request: no version suffix");
    Request::new(name, "")
}
