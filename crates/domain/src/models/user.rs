//! User domain models and auth request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_positive_id;
use validator::Validate;

/// A user account. Every user has exactly one role and one department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: Option<String>,
    pub role_id: i64,
    pub department_id: i64,
    pub created_at: DateTime<Utc>,
}

/// The authenticated principal attached to a request after token
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub role_id: i64,
    pub department_id: i64,
}

/// Compact user identity used inside announcement payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// Profile returned by auth endpoints, with role and department resolved
/// to names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub department: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Registration request body. New accounts get the employee role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 120, message = "Full name must be 1-120 characters"))]
    pub full_name: String,
    #[validate(custom(function = "validate_positive_id"))]
    pub department_id: i64,
}

/// Response for successful login/registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    use super::*;

    #[test]
    fn test_user_never_serializes_password_hash() {
        let user = User {
            id: 1,
            email: SafeEmail().fake(),
            full_name: Name().fake(),
            password_hash: Some("$argon2id$secret".to_string()),
            role_id: 1,
            department_id: 1,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "user1@corp.local".to_string(),
            password: "User123!".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "User123!".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = LoginRequest {
            email: "user1@corp.local".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_non_positive_department() {
        let request = RegisterRequest {
            email: "new@corp.local".to_string(),
            password: "Secret1!".to_string(),
            full_name: "New Hire".to_string(),
            department_id: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_deserializes_camel_case() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"new@corp.local","password":"Secret1!","fullName":"New Hire","departmentId":2}"#,
        )
        .unwrap();
        assert_eq!(request.full_name, "New Hire");
        assert_eq!(request.department_id, 2);
    }
}
