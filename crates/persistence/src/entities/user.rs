//! User entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role_id: i64,
    pub department_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            password_hash: Some(entity.password_hash),
            role_id: entity.role_id,
            department_id: entity.department_id,
            created_at: entity.created_at,
        }
    }
}

/// User row joined with role and department names.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileEntity {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role_name: String,
    pub department_name: String,
}

impl From<UserProfileEntity> for domain::models::UserProfile {
    fn from(entity: UserProfileEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            role: entity.role_name,
            department: entity.department_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    use super::*;

    #[test]
    fn test_user_entity_conversion() {
        let email: String = SafeEmail().fake();
        let entity = UserEntity {
            id: 2,
            email: email.clone(),
            full_name: Name().fake(),
            password_hash: "$argon2id$hash".to_string(),
            role_id: 2,
            department_id: 1,
            created_at: Utc::now(),
        };

        let user: domain::models::User = entity.into();
        assert_eq!(user.id, 2);
        assert_eq!(user.email, email);
        assert_eq!(user.password_hash.as_deref(), Some("$argon2id$hash"));
        assert_eq!(user.role_id, 2);
    }

    #[test]
    fn test_profile_entity_conversion() {
        let entity = UserProfileEntity {
            id: 1,
            email: "admin@corp.local".to_string(),
            full_name: "System Admin".to_string(),
            role_name: "admin".to_string(),
            department_name: "IT".to_string(),
        };

        let profile: domain::models::UserProfile = entity.into();
        assert_eq!(profile.role, "admin");
        assert_eq!(profile.department, "IT");
    }
}
