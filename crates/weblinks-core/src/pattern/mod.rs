//! Composite URL pattern built from the grammar clauses.
//!
//! The default pattern is compiled once per process and shared. Overrides
//! are compiled once by the caller and shared the same way.

pub mod clauses;
pub mod errors;

pub use errors::PatternError;

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use clauses::{
    DOMAIN_BODY, IPV4, LOCALHOST, NEGATED_DOMAIN_CHARACTER_SET, NEGATED_PATH_CHARACTER_SET, PATH,
    PORT, PROTOCOL, QUERY_FRAGMENT_CHARACTER_SET, TLD,
};

static WEB_LINKS: LazyLock<CompositePattern> = LazyLock::new(|| {
    let source = build_source();
    debug!(event = "core.pattern.default_compiled", len = source.len());
    let regex = Regex::new(&source).expect("built-in URL grammar is valid");
    CompositePattern {
        regex: Arc::new(regex),
    }
});

/// Assemble the default grammar:
/// `leading-boundary (protocol host path? query? fragment?) trailing-boundary`.
///
/// Group 1 is the canonical URI; every other group is non-capturing.
pub fn build_source() -> String {
    let host = format!("(?:{DOMAIN_BODY}\\.{TLD}|{IPV4}|{LOCALHOST})(?:{PORT})?");
    let query = format!("(?:\\?{QUERY_FRAGMENT_CHARACTER_SET})?");
    let fragment = format!("(?:#{QUERY_FRAGMENT_CHARACTER_SET})?");
    let body = format!("{host}(?:{PATH})?{query}{fragment}");
    let start = format!("(?:^|{NEGATED_DOMAIN_CHARACTER_SET}+)");
    let end = format!("(?:$|{NEGATED_PATH_CHARACTER_SET}+)");
    format!("{start}({PROTOCOL}{body}){end}")
}

/// An immutable, compiled link pattern. Cloning shares the compiled regex.
#[derive(Clone)]
pub struct CompositePattern {
    regex: Arc<Regex>,
}

impl CompositePattern {
    /// The built-in web link grammar.
    pub fn web_links() -> Self {
        WEB_LINKS.clone()
    }

    /// Compile a caller-supplied pattern. Capture group 1 must hold the URI.
    pub fn from_source(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source).map_err(|e| PatternError::InvalidRegex {
            source_text: source.to_string(),
            message: e.to_string(),
        })?;
        if regex.captures_len() < 2 {
            return Err(PatternError::MissingUriGroup {
                source_text: source.to_string(),
            });
        }
        debug!(event = "core.pattern.override_compiled", source = source);
        Ok(Self {
            regex: Arc::new(regex),
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether two handles share one compiled regex.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.regex, &other.regex)
    }
}

impl fmt::Debug for CompositePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositePattern")
            .field(&self.regex.as_str())
            .finish()
    }
}
