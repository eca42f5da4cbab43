//! Department repository for database operations.

use domain::models::Department;
use sqlx::PgPool;

use crate::entities::DepartmentEntity;

/// Repository for department database operations.
#[derive(Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all departments ordered by id.
    pub async fn list(&self) -> Result<Vec<Department>, sqlx::Error> {
        let entities = sqlx::query_as::<_, DepartmentEntity>(
            "SELECT id, name FROM departments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Check that a department id exists.
    pub async fn exists(&self, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}
