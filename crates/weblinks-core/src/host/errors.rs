use crate::errors::WebLinksError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Host terminal does not support {capability}")]
    CapabilityUnavailable { capability: &'static str },

    #[error("Host terminal rejected the registration: {message}")]
    RegistrationRejected { message: String },
}

impl WebLinksError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::CapabilityUnavailable { .. } => "HOST_CAPABILITY_UNAVAILABLE",
            HostError::RegistrationRejected { .. } => "HOST_REGISTRATION_REJECTED",
        }
    }
}
