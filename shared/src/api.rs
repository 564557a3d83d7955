use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Field, FormValues};

// ============================================================================
// Form Payloads
// ============================================================================

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub remember: bool,
}

impl LoginData {
    pub fn from_values(values: &FormValues, remember: bool) -> Self {
        Self {
            email: values.get(Field::Email).to_string(),
            password: values.get(Field::Password).to_string(),
            remember,
        }
    }
}

impl fmt::Debug for LoginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(
        length(min = 1, message = "Please confirm your password"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub confirm_password: String,
}

impl RegisterData {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get(Field::Name).to_string(),
            email: values.get(Field::Email).to_string(),
            password: values.get(Field::Password).to_string(),
            confirm_password: values.get(Field::ConfirmPassword).to_string(),
        }
    }
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Session API Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub session_id: Option<String>,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormKind;

    #[test]
    fn test_login_payload_serializes_camel_case() {
        let mut values = FormValues::empty(FormKind::Login);
        values.set(Field::Email, "a@b.com");
        values.set(Field::Password, "secret");

        let json = serde_json::to_value(LoginData::from_values(&values, true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "secret", "remember": true})
        );
    }

    #[test]
    fn test_register_payload_uses_confirm_password_key() {
        let values: FormValues = [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Password, "pw"),
            (Field::ConfirmPassword, "pw"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(RegisterData::from_values(&values)).unwrap();
        assert_eq!(json["confirmPassword"], "pw");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let data = RegisterData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", data);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("ada@example.com"));
    }
}
