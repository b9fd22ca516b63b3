use crate::errors::WebLinksError;

/// Failures reported by the browsing environment. Always recoverable.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("Opening a browsing context was blocked: {reason}")]
    OpenBlocked { reason: String },

    #[error("Browsing context refused to clear its opener: {reason}")]
    OpenerClearRefused { reason: String },

    #[error("Refusing to open '{url}': only http:// and https:// are allowed")]
    SchemeBlocked { url: String },

    #[error("Failed to navigate to '{url}': {message}")]
    NavigationFailed { url: String, message: String },
}

impl WebLinksError for EnvironmentError {
    fn error_code(&self) -> &'static str {
        match self {
            EnvironmentError::OpenBlocked { .. } => "ENV_OPEN_BLOCKED",
            EnvironmentError::OpenerClearRefused { .. } => "ENV_OPENER_CLEAR_REFUSED",
            EnvironmentError::SchemeBlocked { .. } => "ENV_SCHEME_BLOCKED",
            EnvironmentError::NavigationFailed { .. } => "ENV_NAVIGATION_FAILED",
        }
    }
}

/// Failures confined to a single link invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("Cannot parse link '{uri}': {message}")]
    InvalidUri { uri: String, message: String },

    #[error("Cannot remap loopback link '{uri}': {message}")]
    RewriteFailed { uri: String, message: String },
}

impl WebLinksError for InvocationError {
    fn error_code(&self) -> &'static str {
        match self {
            InvocationError::InvalidUri { .. } => "INVOCATION_INVALID_URI",
            InvocationError::RewriteFailed { .. } => "INVOCATION_REWRITE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, InvocationError::InvalidUri { .. })
    }
}
