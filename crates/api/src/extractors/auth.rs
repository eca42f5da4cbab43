//! Bearer-token authentication extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use domain::models::AuthUser;
use shared::jwt::extract_user_id;

use crate::app::AppState;
use crate::error::ApiError;

/// The authenticated principal, taken from a validated Bearer token.
///
/// Role and department ids reflect the token issue time; handlers that need
/// the current role re-read the user row.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Invalid Authorization header format".to_string())
        })?;

        let claims = state
            .jwt
            .validate_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        let user_id = extract_user_id(&claims)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(CurrentUser(AuthUser {
            id: user_id,
            role_id: claims.role_id,
            department_id: claims.department_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::jwt::JwtConfig;

    #[test]
    fn test_claims_map_to_principal() {
        let jwt = JwtConfig::new("test_secret_key_for_extractor_tests", 3600);
        let (token, _jti) = jwt.generate_token(42, "user@corp.local", 2, 1).unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        let user_id = extract_user_id(&claims).unwrap();

        assert_eq!(user_id, 42);
        assert_eq!(claims.role_id, 2);
        assert_eq!(claims.department_id, 1);
    }
}
