use weblinks_config::MatcherConfig;

use crate::matcher::URI_MATCH_INDEX;

/// What a host terminal supports, declared up front instead of probed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host accepts `register_link_provider`.
    pub link_provider: bool,
}

impl HostCapabilities {
    pub fn legacy_only() -> Self {
        Self {
            link_provider: false,
        }
    }

    pub fn with_link_provider() -> Self {
        Self {
            link_provider: true,
        }
    }
}

/// Handle returned by legacy matcher registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatcherId(pub u32);

/// Options for legacy matcher registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatcherOptions {
    /// Capture group the host hands to the link handler.
    pub match_index: usize,
    /// Higher priority matchers win when matches overlap.
    pub priority: i32,
}

impl Default for LinkMatcherOptions {
    fn default() -> Self {
        Self {
            match_index: URI_MATCH_INDEX,
            priority: 0,
        }
    }
}

impl From<&MatcherConfig> for LinkMatcherOptions {
    fn from(config: &MatcherConfig) -> Self {
        Self {
            priority: config.priority(),
            ..Self::default()
        }
    }
}
