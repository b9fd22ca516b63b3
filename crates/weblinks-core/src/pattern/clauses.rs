//! Grammar clauses for the web link pattern.
//!
//! Each clause is one production of the grammar. They are only ever
//! combined by concatenation or alternation in [`super::build_source`].
//! Letter classes are ASCII; `\d`/`\w` are spelled out because the regex
//! crate treats them as Unicode classes.

/// `http://` or `https://`. Bare domains never match.
pub const PROTOCOL: &str = r"https?://";

/// Characters allowed in a domain name. Also the leading-boundary alphabet.
pub const DOMAIN_CHARACTER_SET: &str = r"[0-9A-Za-z.\-]";

/// Anything outside [`DOMAIN_CHARACTER_SET`].
pub const NEGATED_DOMAIN_CHARACTER_SET: &str = r"[^0-9A-Za-z.\-]";

pub const DOMAIN_BODY: &str = r"[0-9A-Za-z.\-]+";

pub const TLD: &str = r"[A-Za-z.]{2,18}";

/// Dotted quad. Octet ranges are not checked.
pub const IPV4: &str = r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}";

pub const LOCALHOST: &str = "localhost";

pub const PORT: &str = r":[0-9]{1,5}";

/// A path starts with `/`. Its last character may not be a colon; quotes
/// and whitespace are never part of the path alphabet.
pub const PATH: &str = r"/(?:[0-9A-Za-z_/.\-%~:+@]*[0-9A-Za-z_/.\-%~+@])?";

/// Shared by the query string and the hash fragment.
pub const QUERY_FRAGMENT_CHARACTER_SET: &str = r"[0-9A-Za-z_\[\]()/?!#@$%&'*+,:;~=.\-]*";

/// Anything outside the path-safe alphabet. Trailing-boundary alphabet.
pub const NEGATED_PATH_CHARACTER_SET: &str = r"[^0-9A-Za-z_/.\-%]";
