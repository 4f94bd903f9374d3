//! HTTP client for the user service

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::registration::{NewUserProfile, UserRecord, UserServiceApi};
use crate::infrastructure::upstream::{normalize_base_url, ok_or_upstream};

const SERVICE: &str = "User service";
const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

#[derive(Debug, Clone)]
pub struct UserServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserServiceClient {
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
impl UserServiceApi for UserServiceClient {
    async fn create_user(
        &self,
        profile: NewUserProfile,
        idempotency_key: String,
    ) -> Result<UserRecord, DomainError> {
        let response = self
            .client
            .post(format!("{}/", self.base_url))
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .json(&profile)
            .send()
            .await
            .map_err(|e| DomainError::upstream(SERVICE, format!("request failed: {e}"), true))?;

        let response = ok_or_upstream(SERVICE, response).await?;

        response.json::<UserRecord>().await.map_err(|e| {
            DomainError::upstream(SERVICE, format!("invalid response body: {e}"), false)
        })
    }

    async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(format!("{}/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| DomainError::upstream(SERVICE, format!("request failed: {e}"), true))?;

        ok_or_upstream(SERVICE, response).await?;
        Ok(())
    }
}
