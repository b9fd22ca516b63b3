use crate::errors::WebLinksError;
use crate::host::HostError;

#[derive(Debug, thiserror::Error)]
pub enum AddonError {
    #[error("Addon is already attached to a host terminal")]
    AlreadyActivated,

    #[error("Addon has been disposed and cannot be activated")]
    Disposed,

    #[error("Failed to register links with the host terminal: {source}")]
    Registration {
        #[from]
        source: HostError,
    },
}

impl WebLinksError for AddonError {
    fn error_code(&self) -> &'static str {
        match self {
            AddonError::AlreadyActivated => "ADDON_ALREADY_ACTIVATED",
            AddonError::Disposed => "ADDON_DISPOSED",
            AddonError::Registration { .. } => "ADDON_REGISTRATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_activated() {
        let error = AddonError::AlreadyActivated;
        assert_eq!(
            error.to_string(),
            "Addon is already attached to a host terminal"
        );
        assert_eq!(error.error_code(), "ADDON_ALREADY_ACTIVATED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_registration_wraps_host_error() {
        let error: AddonError = HostError::RegistrationRejected {
            message: "matcher table full".to_string(),
        }
        .into();
        assert!(error.to_string().contains("matcher table full"));
        assert_eq!(error.error_code(), "ADDON_REGISTRATION_FAILED");
    }
}
