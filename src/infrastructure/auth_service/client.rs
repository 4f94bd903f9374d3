//! HTTP client for the authentication authority
//!
//! Covers both outbound concerns the gateway has with the auth service:
//! token validation for the gate and credential registration for the saga.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use crate::domain::DomainError;
use crate::domain::auth::{TokenValidation, TokenValidator};
use crate::domain::registration::CredentialServiceApi;
use crate::infrastructure::upstream::{normalize_base_url, ok_or_upstream};

const SERVICE: &str = "Auth service";

#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthServiceClient {
    /// Build a client with a bounded per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }
}

#[async_trait]
impl TokenValidator for AuthServiceClient {
    async fn validate(&self, token: &str) -> Result<TokenValidation, DomainError> {
        let response = self
            .client
            .get(format!("{}/validate-token", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| DomainError::token_validation_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::token_invalid(format!("HTTP {status}: {body}")));
        }

        response.json::<TokenValidation>().await.map_err(|e| {
            DomainError::token_validation_unavailable(format!(
                "Failed to parse validation response: {e}"
            ))
        })
    }
}

#[async_trait]
impl CredentialServiceApi for AuthServiceClient {
    async fn register_credentials(
        &self,
        email: String,
        password: String,
    ) -> Result<(), DomainError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| DomainError::upstream(SERVICE, format!("request failed: {e}"), true))?;

        ok_or_upstream(SERVICE, response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> AuthServiceClient {
        AuthServiceClient::new(server.uri(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_validate_forwards_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/validate-token"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"valid": true, "email": "anna@example.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let validation = client(&server).validate("tok-1").await.unwrap();

        assert!(validation.valid);
        assert_eq!(validation.subject(), Some("anna@example.com"));
    }

    #[tokio::test]
    async fn test_validate_maps_error_status_to_invalid_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/validate-token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&server)
            .await;

        let error = client(&server).validate("tok-1").await.unwrap_err();

        assert!(matches!(error, DomainError::TokenInvalid { .. }));
    }

    #[tokio::test]
    async fn test_validate_maps_transport_failure_to_unavailable() {
        // Point at a server that was already shut down. Use a dedicated
        // (non-pooled) server so dropping it actually closes the listener.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let client = AuthServiceClient::new(uri, Duration::from_millis(200)).unwrap();
        let error = client.validate("tok-1").await.unwrap_err();

        assert!(matches!(
            error,
            DomainError::TokenValidationUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_register_credentials_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(
                json!({"email": "anna@example.com", "password": "correct-horse"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("registered"))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .register_credentials("anna@example.com".to_string(), "correct-horse".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_credentials_classifies_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let error = client(&server)
            .register_credentials("anna@example.com".to_string(), "pw-12345678".to_string())
            .await
            .unwrap_err();
        assert!(error.is_transient());

        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let error = client(&server)
            .register_credentials("anna@example.com".to_string(), "pw-12345678".to_string())
            .await
            .unwrap_err();
        assert!(!error.is_transient());
    }
}
