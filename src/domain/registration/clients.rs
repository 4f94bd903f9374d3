//! Outbound client seams for the two write APIs

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::request::RegistrationRequest;
use crate::domain::DomainError;

/// Profile payload sent to the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUserProfile {
    pub name: String,
    pub surname: String,
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

impl NewUserProfile {
    pub fn from_registration(request: &RegistrationRequest) -> Self {
        Self {
            name: request.name.clone(),
            surname: request.surname.clone(),
            birth_date: request.birth_date,
            email: request.email.clone(),
        }
    }
}

/// Profile record as returned by the user service.
///
/// The id is assigned remotely; the orchestrator only ever reads it back
/// for the compensating delete.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[serde(default, rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
    pub email: String,
    #[serde(default)]
    pub cards: Vec<serde_json::Value>,
}

/// User service write operations (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserServiceApi: Send + Sync {
    /// Create a profile record. The idempotency key makes a retried call
    /// safe: the service must not create a second profile for the same key.
    async fn create_user(
        &self,
        profile: NewUserProfile,
        idempotency_key: String,
    ) -> Result<UserRecord, DomainError>;

    /// Delete a profile record (the compensating action).
    async fn delete_user(&self, id: i64) -> Result<(), DomainError>;
}

/// Auth service credential registration (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialServiceApi: Send + Sync {
    async fn register_credentials(&self, email: String, password: String)
    -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_birth_date_when_present() {
        let profile = NewUserProfile {
            name: "Anna".to_string(),
            surname: "Kovach".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            email: "anna@example.com".to_string(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["birthDate"], "1990-04-12");
    }

    #[test]
    fn test_profile_omits_absent_birth_date() {
        let profile = NewUserProfile {
            name: "Anna".to_string(),
            surname: "Kovach".to_string(),
            birth_date: None,
            email: "anna@example.com".to_string(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("birthDate").is_none());
    }

    #[test]
    fn test_user_record_deserializes_with_empty_cards() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Anna",
            "surname": "Kovach",
            "birthDate": "1990-04-12",
            "email": "anna@example.com",
            "cards": []
        }))
        .unwrap();

        assert_eq!(record.id, 42);
        assert!(record.cards.is_empty());
    }
}
