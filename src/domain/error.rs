use thiserror::Error;

/// Core domain errors
///
/// Upstream failures never cross the gateway boundary as errors; the
/// `Provider` variant exists for logging and for the internal fallible layer
/// underneath the always-succeeding gateway operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = DomainError::validation("gradeLevel must be between 1 and 12");
        assert_eq!(
            error.to_string(),
            "Validation error: gradeLevel must be between 1 and 12"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = DomainError::provider("HTTP 503: upstream unavailable");
        assert_eq!(
            error.to_string(),
            "Provider error: HTTP 503: upstream unavailable"
        );
    }
}
