use crate::errors::WebLinksError;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid URL pattern '{source_text}': {message}")]
    InvalidRegex {
        source_text: String,
        message: String,
    },

    #[error("URL pattern '{source_text}' has no capture group for the URI")]
    MissingUriGroup { source_text: String },
}

impl WebLinksError for PatternError {
    fn error_code(&self) -> &'static str {
        match self {
            PatternError::InvalidRegex { .. } => "PATTERN_INVALID_REGEX",
            PatternError::MissingUriGroup { .. } => "PATTERN_MISSING_URI_GROUP",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
