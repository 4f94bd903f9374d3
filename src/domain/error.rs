use thiserror::Error;

/// Core domain errors
///
/// Transport-level failures from outbound calls are mapped into this
/// taxonomy at the call site; nothing else crosses the HTTP boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid token: {message}")]
    TokenInvalid { message: String },

    #[error("Token validation unavailable: {message}")]
    TokenValidationUnavailable { message: String },

    #[error("{service} failed: {message}")]
    Upstream {
        service: String,
        message: String,
        transient: bool,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn token_invalid(message: impl Into<String>) -> Self {
        Self::TokenInvalid {
            message: message.into(),
        }
    }

    pub fn token_validation_unavailable(message: impl Into<String>) -> Self {
        Self::TokenValidationUnavailable {
            message: message.into(),
        }
    }

    pub fn upstream(
        service: impl Into<String>,
        message: impl Into<String>,
        transient: bool,
    ) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
            transient,
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

    /// Whether retrying the failed call could plausibly succeed.
    ///
    /// Only upstream failures marked transient (timeouts, connection
    /// errors, 5xx responses) qualify; 4xx responses are permanent.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Upstream { transient: true, .. })
    }
}
