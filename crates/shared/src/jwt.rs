//! JWT token utilities.
//!
//! Tokens are signed with HS256 using a shared secret from configuration.
//! Claims carry the authenticated principal (user id, email, role id,
//! department id) so route handlers can authorize without a directory
//! lookup on every request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

/// JWT token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, stringified)
    pub sub: String,
    /// User email
    pub email: String,
    /// Role id of the user at token issue time
    #[serde(rename = "roleId")]
    pub role_id: i64,
    /// Department id of the user at token issue time
    #[serde(rename = "departmentId")]
    pub department_id: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// JWT ID (unique token identifier)
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Token expiration in seconds (default: 604800 = 7 days)
    pub token_expiry_secs: i64,
    /// Leeway in seconds for clock skew tolerance
    pub leeway_secs: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("token_expiry_secs", &self.token_expiry_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Default leeway in seconds for clock skew tolerance
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

impl JwtConfig {
    /// Creates a new JwtConfig from a shared secret.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry_secs,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }

    /// Generates a token for the given principal.
    ///
    /// Returns the encoded token and its `jti`.
    pub fn generate_token(
        &self,
        user_id: i64,
        email: &str,
        role_id: i64,
        department_id: i64,
    ) -> Result<(String, String), JwtError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();
        let exp = (now + Duration::seconds(self.token_expiry_secs)).timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role_id,
            department_id,
            exp,
            iat: now.timestamp(),
            jti: jti.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))?;

        Ok((token, jti))
    }

    /// Validates a token and returns its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => JwtError::InvalidToken,
                _ => JwtError::DecodingError(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

/// Extracts the user id from validated claims.
pub fn extract_user_id(claims: &Claims) -> Result<i64, JwtError> {
    claims.sub.parse().map_err(|_| JwtError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> JwtConfig {
        JwtConfig::new("test_secret_key_for_jwt_testing_12345", 3600)
    }

    #[test]
    fn test_generate_token() {
        let config = create_test_config();

        let (token, jti) = config
            .generate_token(42, "user1@corp.local", 2, 1)
            .unwrap();

        assert!(!token.is_empty());
        assert!(!jti.is_empty());
        assert!(token.contains('.'), "JWT should have dots separating parts");
    }

    #[test]
    fn test_validate_token_roundtrip() {
        let config = create_test_config();

        let (token, jti) = config
            .generate_token(42, "user1@corp.local", 2, 1)
            .unwrap();
        let claims = config.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "user1@corp.local");
        assert_eq!(claims.role_id, 2);
        assert_eq!(claims.department_id, 1);
        assert_eq!(claims.jti, jti);
    }

    #[test]
    fn test_expired_token() {
        let mut config = create_test_config();
        config.token_expiry_secs = -60;
        config.leeway_secs = 0;

        let (token, _) = config.generate_token(1, "a@corp.local", 1, 1).unwrap();
        let result = config.validate_token(&token);

        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_invalid_token() {
        let config = create_test_config();
        let result = config.validate_token("not_a_jwt");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = create_test_config();
        let other = JwtConfig::new("a_completely_different_secret_67890", 3600);

        let (token, _) = config.generate_token(1, "a@corp.local", 1, 1).unwrap();
        let result = other.validate_token(&token);

        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_extract_user_id() {
        let config = create_test_config();

        let (token, _) = config.generate_token(7, "b@corp.local", 2, 3).unwrap();
        let claims = config.validate_token(&token).unwrap();

        assert_eq!(extract_user_id(&claims).unwrap(), 7);
    }

    #[test]
    fn test_unique_jti_per_token() {
        let config = create_test_config();

        let (_, jti1) = config.generate_token(1, "a@corp.local", 1, 1).unwrap();
        let (_, jti2) = config.generate_token(1, "a@corp.local", 1, 1).unwrap();

        assert_ne!(jti1, jti2, "Each token should have unique jti");
    }

    #[test]
    fn test_claims_serialization_uses_camel_case() {
        let config = create_test_config();
        let (token, _) = config.generate_token(1, "a@corp.local", 5, 9).unwrap();
        let claims = config.validate_token(&token).unwrap();

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["roleId"], 5);
        assert_eq!(json["departmentId"], 9);
    }
}
