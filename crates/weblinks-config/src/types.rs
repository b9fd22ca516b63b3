//! Configuration type definitions for weblinks.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [addon]
//! use_link_provider = true
//! url_regex = "(https?://[^\\s]+)"
//!
//! [matcher]
//! priority = 0
//!
//! [remap]
//! page_url = "https://3000-workspace123.example.dev/"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.weblinks/config.toml`
/// 2. Project config: `./.weblinks/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeblinksConfig {
    /// How the addon attaches to a host terminal
    #[serde(default)]
    pub addon: AddonConfig,

    /// Options passed through to legacy matcher registration
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Loopback hostname remapping
    #[serde(default)]
    pub remap: RemapConfig,
}

/// Addon integration settings.
///
/// Fields are `Option<T>` to support proper config hierarchy merging:
/// only explicitly-set values override lower-priority configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonConfig {
    /// Request provider mode when the host supports it. Default: false.
    #[serde(default)]
    pub use_link_provider: Option<bool>,

    /// Pattern overriding the built-in URL grammar. Provider mode only.
    /// Capture group 1 must hold the URI.
    #[serde(default)]
    pub url_regex: Option<String>,
}

impl AddonConfig {
    pub fn use_link_provider(&self) -> bool {
        self.use_link_provider.unwrap_or(false)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            use_link_provider: override_config.use_link_provider.or(base.use_link_provider),
            url_regex: override_config
                .url_regex
                .clone()
                .or_else(|| base.url_regex.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Priority of the legacy matcher relative to other host matchers.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl MatcherConfig {
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            priority: override_config.priority.or(base.priority),
        }
    }
}

/// Settings for rewriting loopback links opened from a proxied workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemapConfig {
    /// Location of the page hosting the terminal, e.g.
    /// `https://3000-workspace123.example.dev/`.
    #[serde(default)]
    pub page_url: Option<String>,
}

impl RemapConfig {
    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            page_url: override_config
                .page_url
                .clone()
                .or_else(|| base.page_url.clone()),
        }
    }
}
