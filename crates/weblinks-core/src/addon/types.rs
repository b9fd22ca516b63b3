use weblinks_config::WeblinksConfig;

use crate::host::LinkMatcherOptions;
use crate::pattern::{CompositePattern, PatternError};

/// How an addon is attached to its host terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// `register_link_matcher` with the built-in pattern.
    Legacy,
    /// `register_link_provider` with the built-in pattern or an override.
    Provider,
}

impl LinkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkMode::Legacy => "legacy",
            LinkMode::Provider => "provider",
        }
    }
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addon configuration, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct AddonOptions {
    /// Request provider mode when the host supports it.
    pub use_link_provider: bool,
    /// Replaces the built-in pattern in provider mode.
    pub url_regex: Option<CompositePattern>,
    /// Passed to legacy registration; `match_index` is always overridden.
    pub matcher: LinkMatcherOptions,
}

impl AddonOptions {
    /// Build options from loaded configuration, compiling `url_regex` once.
    pub fn from_config(config: &WeblinksConfig) -> Result<Self, PatternError> {
        let url_regex = config
            .addon
            .url_regex
            .as_deref()
            .map(CompositePattern::from_source)
            .transpose()?;

        Ok(Self {
            use_link_provider: config.addon.use_link_provider(),
            url_regex,
            matcher: LinkMatcherOptions::from(&config.matcher),
        })
    }
}
