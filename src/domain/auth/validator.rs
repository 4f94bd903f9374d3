//! Token validation seam

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::DomainError;

/// Verdict returned by the authentication authority for one token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl TokenValidation {
    /// The confirmed subject, if any.
    ///
    /// A validation counts as positive only when the authority confirmed
    /// the token AND named a non-empty subject; a success response with a
    /// missing or empty email is treated as invalid.
    pub fn subject(&self) -> Option<&str> {
        if !self.valid {
            return None;
        }
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Delegated token validation (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Ask the authentication authority whether `token` is valid.
    ///
    /// Callers must treat any `Err` exactly like an invalid token.
    async fn validate(&self, token: &str) -> Result<TokenValidation, DomainError>;
}
