//! Request-scoped security principal

/// The single authority granted to every authenticated principal.
pub const AUTHORITY_USER: &str = "USER";

/// Principal attached to a request after successful token validation.
///
/// Built once per request and carried in the request extensions for the
/// remainder of its processing; never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    subject: String,
    authorities: Vec<String>,
}

impl SecurityContext {
    /// Create a context for a validated subject with the fixed authority set.
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities: vec![AUTHORITY_USER.to_string()],
        }
    }

    /// The validated subject (an email address).
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
