use std::error::Error;

/// Base trait for all weblinks errors
pub trait WebLinksError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl WebLinksError for weblinks_config::ConfigError {
    fn error_code(&self) -> &'static str {
        weblinks_config::ConfigError::error_code(self)
    }

    fn is_user_error(&self) -> bool {
        weblinks_config::ConfigError::is_user_error(self)
    }
}
