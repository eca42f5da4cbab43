//! Department entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the departments table.
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentEntity {
    pub id: i64,
    pub name: String,
}

impl From<DepartmentEntity> for domain::models::Department {
    fn from(entity: DepartmentEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
