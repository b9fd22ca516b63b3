//! weblinks-core: hyperlink detection and invocation for terminal text.
//!
//! This library provides:
//! - The URL grammar used to find links in rendered terminal lines
//! - The boundary policy that keeps matches from starting or ending mid-word
//! - `WebLinksAddon`, which attaches the grammar to a host terminal through
//!   either the legacy link-matcher API or the link-provider API
//! - The default link handler, which opens links in a fresh browsing context
//!   and remaps loopback addresses for proxied workspaces

pub mod addon;
pub mod errors;
pub mod handler;
pub mod host;
pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod provider;

pub use addon::{AddonError, AddonOptions, LinkMode, WebLinksAddon};
pub use errors::WebLinksError;
pub use handler::{
    BrowsingContext, BrowsingEnvironment, EnvironmentError, InteractionEvent, LinkHandler,
    SystemBrowser, WebLinkHandler,
};
pub use host::{
    Disposable, HostCapabilities, HostError, HostTerminal, LinkMatcherOptions, MatcherId,
};
pub use logging::init_logging;
pub use matcher::{LinkMatch, URI_MATCH_INDEX, find_links};
pub use pattern::{CompositePattern, PatternError};
pub use provider::{BufferPosition, BufferRange, ProvidedLink, WebLinkProvider};
