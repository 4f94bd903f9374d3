//! Signup payload and its constraints

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Client-submitted signup payload.
///
/// Validated in full before any side effect; a violation list is the only
/// branch of the saga guaranteed to be free of network calls.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(
        email(message = "Email should be valid"),
        length(max = 128, message = "Email must be at most 128 characters")
    )]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 32, message = "Name must be 1 to 32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Surname must be 1 to 32 characters"))]
    pub surname: String,

    #[serde(default, rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
}

/// Flatten validation errors into the message list returned to the client.
pub fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }

    // Field order out of the validator is a map traversal; sort for a
    // stable response body.
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            email: "anna@example.com".to_string(),
            password: "correct-horse".to_string(),
            name: "Anna".to_string(),
            surname: "Kovach".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_request_collects_all_violations() {
        let request = RegistrationRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            name: String::new(),
            surname: "B".to_string(),
            birth_date: None,
        };

        let errors = request.validate().unwrap_err();
        let messages = violation_messages(&errors);

        assert_eq!(messages.len(), 3);
        assert!(messages.contains(&"Email should be valid".to_string()));
        assert!(messages.contains(&"Password must be at least 8 characters".to_string()));
        assert!(messages.contains(&"Name must be 1 to 32 characters".to_string()));
    }

    #[test]
    fn test_overlong_fields_rejected() {
        let mut request = valid_request();
        request.name = "x".repeat(33);
        request.surname = "y".repeat(33);
        // Well-formed address pushed past 128 characters by its domain.
        request.email = format!("{}@{}.example.com", "e".repeat(60), "d".repeat(60));

        let errors = request.validate().unwrap_err();
        let messages = violation_messages(&errors);

        assert!(messages.contains(&"Email must be at most 128 characters".to_string()));
        assert!(messages.contains(&"Name must be 1 to 32 characters".to_string()));
        assert!(messages.contains(&"Surname must be 1 to 32 characters".to_string()));
    }

    #[test]
    fn test_birth_date_is_optional() {
        let mut request = valid_request();
        request.birth_date = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_deserializes_birth_date_field() {
        let request: RegistrationRequest = serde_json::from_value(serde_json::json!({
            "email": "anna@example.com",
            "password": "correct-horse",
            "name": "Anna",
            "surname": "Kovach",
            "birthDate": "1990-04-12"
        }))
        .unwrap();

        assert_eq!(request.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12));
    }
}
