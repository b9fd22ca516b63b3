//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.weblinks/config.toml` (global user preferences)
//! 3. **Project config** - `./.weblinks/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::Path;

use tracing::debug;
use weblinks_paths::WeblinksPaths;

use crate::errors::ConfigError;
use crate::types::{AddonConfig, MatcherConfig, RemapConfig, WeblinksConfig};
use crate::validation::validate_config;

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<WeblinksConfig, ConfigError> {
    let paths = WeblinksPaths::resolve().map_err(|e| ConfigError::PathUnavailable {
        message: e.to_string(),
    })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(Some(&paths.user_config()), &project_root)
}

/// Load the hierarchy from an explicit user config path and project root.
pub fn load_hierarchy_from(
    user_config: Option<&Path>,
    project_root: &Path,
) -> Result<WeblinksConfig, ConfigError> {
    let mut config = WeblinksConfig::default();

    if let Some(path) = user_config
        && let Some(user) = load_optional(path)?
    {
        config = merge_configs(config, user);
    }

    let project_path = WeblinksPaths::project_config(project_root);
    if let Some(project) = load_optional(&project_path)? {
        config = merge_configs(config, project);
    }

    validate_config(&config)?;

    debug!(
        event = "config.load_completed",
        use_link_provider = config.addon.use_link_provider(),
        has_url_regex = config.addon.url_regex.is_some(),
        has_page_url = config.remap.page_url.is_some()
    );

    Ok(config)
}

/// Load a config file, treating "not found" as absent.
fn load_optional(path: &Path) -> Result<Option<WeblinksConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "config.file_not_found", path = %path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<WeblinksConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: WeblinksConfig, override_config: WeblinksConfig) -> WeblinksConfig {
    WeblinksConfig {
        addon: AddonConfig::merge(&base.addon, &override_config.addon),
        matcher: MatcherConfig::merge(&base.matcher, &override_config.matcher),
        remap: RemapConfig::merge(&base.remap, &override_config.remap),
    }
}
