//! User repository for database operations.

use async_trait::async_trait;
use domain::models::{User, UserProfile};
use domain::services::targeting::UserDirectory;
use sqlx::PgPool;

use crate::entities::{UserEntity, UserProfileEntity};

const USER_COLUMNS: &str = "id, email, full_name, password_hash, role_id, department_id, created_at";

/// Input for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role_id: i64,
    pub department_id: i64,
}

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Fails with a unique violation if the email is
    /// already taken.
    pub async fn create(&self, record: CreateUserRecord) -> Result<User, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (email, full_name, password_hash, role_id, department_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(&record.email)
        .bind(&record.full_name)
        .bind(&record.password_hash)
        .bind(record.role_id)
        .bind(record.department_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find a user by email, including the password hash for credential
    /// verification.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1",
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Load a user's profile with role and department resolved to names.
    pub async fn find_profile(&self, id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserProfileEntity>(
            r#"
            SELECT u.id, u.email, u.full_name, r.name AS role_name, d.name AS department_name
            FROM users u
            JOIN roles r ON r.id = u.role_id
            JOIN departments d ON d.id = u.department_id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn all_user_ids(&self) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM users")
            .fetch_all(&self.pool)
            .await
    }

    async fn user_ids_by_roles(&self, role_ids: &[i64]) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM users WHERE role_id = ANY($1)")
            .bind(role_ids)
            .fetch_all(&self.pool)
            .await
    }

    async fn user_ids_by_departments(
        &self,
        department_ids: &[i64],
    ) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM users WHERE department_id = ANY($1)")
            .bind(department_ids)
            .fetch_all(&self.pool)
            .await
    }
}
