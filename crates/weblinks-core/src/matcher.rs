//! Link extraction and the boundary policy.
//!
//! A candidate must start at the beginning of the text or right after a
//! character outside the domain alphabet, and must end at the end of the text
//! or right before a character outside the path-safe alphabet. The boundary
//! characters are consumed by the pattern but never part of the URI; the URI
//! is always capture group [`URI_MATCH_INDEX`].

use serde::Serialize;
use tracing::debug;

use crate::pattern::CompositePattern;

/// Capture group holding the canonical URI.
pub const URI_MATCH_INDEX: usize = 1;

/// One link found in a line of text. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkMatch {
    /// Start of the whole match, boundary characters included.
    pub offset: usize,
    /// Length of the whole match, boundary characters included.
    pub length: usize,
    /// Start of the canonical URI.
    pub uri_offset: usize,
    /// The canonical URI text.
    pub uri: String,
}

impl LinkMatch {
    /// Byte offset one past the end of the URI.
    pub fn uri_end(&self) -> usize {
        self.uri_offset + self.uri.len()
    }
}

/// Find every link in `text`, left to right.
///
/// Scanning resumes at the end of each URI rather than at the end of the
/// whole match, so the trailing boundary of one link can serve as the
/// leading boundary of the next. A match whose URI group is absent or empty
/// ends the scan.
pub fn find_links(pattern: &CompositePattern, text: &str) -> Vec<LinkMatch> {
    let regex = pattern.regex();
    let mut links = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = regex.captures_at(text, pos) else {
            break;
        };
        let Some(uri) = caps.get(URI_MATCH_INDEX).filter(|m| !m.is_empty()) else {
            debug!(
                event = "core.matcher.uri_group_missing",
                pattern = pattern.as_str(),
                offset = pos
            );
            break;
        };
        let whole = caps.get_match();

        links.push(LinkMatch {
            offset: whole.start(),
            length: whole.len(),
            uri_offset: uri.start(),
            uri: uri.as_str().to_string(),
        });
        pos = uri.end();
    }

    links
}
