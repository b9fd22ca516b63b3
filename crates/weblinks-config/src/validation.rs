//! Configuration validation logic.

use regex::Regex;

use crate::errors::ConfigError;
use crate::types::WeblinksConfig;

/// Validate a WeblinksConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `addon.url_regex`, if set, must compile and define at least one capture group
/// - `remap.page_url`, if set, must parse as an absolute URL with a host
pub fn validate_config(config: &WeblinksConfig) -> Result<(), ConfigError> {
    if let Some(ref pattern) = config.addon.url_regex {
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidConfiguration {
            message: format!("Invalid url_regex '{}': {}", pattern, e),
        })?;
        // captures_len() counts the implicit whole-match group
        if regex.captures_len() < 2 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "url_regex '{}' must contain a capture group for the URI",
                    pattern
                ),
            });
        }
    }

    if let Some(ref page_url) = config.remap.page_url {
        let parsed = url::Url::parse(page_url).map_err(|e| ConfigError::InvalidConfiguration {
            message: format!("Invalid remap.page_url '{}': {}", page_url, e),
        })?;
        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("remap.page_url '{}' has no host", page_url),
            });
        }
    }

    if config.addon.url_regex.is_some() && !config.addon.use_link_provider() {
        tracing::warn!(
            event = "config.validation.url_regex_ignored",
            "url_regex only applies when use_link_provider is enabled"
        );
    }

    Ok(())
}
