//! Public path allow-list

/// Fixed set of path prefixes that bypass token validation.
///
/// These endpoints perform their own authorization internally (or have
/// none, like the health check); the gate forwards them without any
/// outbound call and without a security context.
#[derive(Debug, Clone)]
pub struct PublicPaths {
    prefixes: Vec<String>,
}

impl PublicPaths {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for PublicPaths {
    fn default() -> Self {
        Self::new(default_public_paths())
    }
}

/// The canonical allow-list: the auth authority's endpoints, the gateway's
/// local registration endpoint, and the health check.
pub fn default_public_paths() -> Vec<String> {
    [
        "/auth/login",
        "/auth/register",
        "/auth/refresh-token",
        "/auth/validate-token",
        "/register",
        "/health",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_endpoints_are_public() {
        let paths = PublicPaths::default();

        assert!(paths.is_public("/auth/login"));
        assert!(paths.is_public("/auth/register"));
        assert!(paths.is_public("/auth/refresh-token"));
        assert!(paths.is_public("/auth/validate-token"));
        assert!(paths.is_public("/register"));
        assert!(paths.is_public("/health"));
    }

    #[test]
    fn test_prefix_matching() {
        let paths = PublicPaths::default();

        assert!(paths.is_public("/auth/login/"));
        assert!(!paths.is_public("/api/users/1"));
        assert!(!paths.is_public("/auth/other"));
        assert!(!paths.is_public("/"));
    }

    #[test]
    fn test_custom_allow_list() {
        let paths = PublicPaths::new(vec!["/ping".to_string()]);

        assert!(paths.is_public("/ping"));
        assert!(!paths.is_public("/health"));
    }
}
