//! Role repository for database operations.

use domain::models::Role;
use sqlx::PgPool;

use crate::entities::RoleEntity;

/// Repository for role database operations.
#[derive(Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all roles ordered by id.
    pub async fn list(&self) -> Result<Vec<Role>, sqlx::Error> {
        let entities = sqlx::query_as::<_, RoleEntity>(
            "SELECT id, name FROM roles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Find a role by its unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let entity = sqlx::query_as::<_, RoleEntity>(
            "SELECT id, name FROM roles WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }
}
