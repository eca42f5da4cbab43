//! Audit log repository for database operations.

use domain::models::{AuditEvent, CreateAuditEventInput};
use sqlx::PgPool;

use crate::entities::AuditEventEntity;

/// Repository for audit log database operations.
#[derive(Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit event.
    pub async fn insert(&self, input: CreateAuditEventInput) -> Result<AuditEvent, sqlx::Error> {
        let entity = sqlx::query_as::<_, AuditEventEntity>(
            r#"
            INSERT INTO audit_log (action, entity, entity_id, metadata)
            VALUES ($1, $2, $3, $4)
            RETURNING id, action, entity, entity_id, metadata, created_at
            "#,
        )
        .bind(input.action.to_string())
        .bind(&input.entity)
        .bind(input.entity_id)
        .bind(input.metadata)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Append an audit event asynchronously (fire and forget).
    /// Uses tokio::spawn to avoid blocking the request. The append is
    /// best-effort: a failed insert is logged and dropped, never retried.
    pub fn insert_async(&self, input: CreateAuditEventInput) {
        let pool = self.pool.clone();
        tokio::spawn(async move {
            let repo = AuditLogRepository::new(pool);
            if let Err(e) = repo.insert(input).await {
                tracing::error!("Failed to insert audit event: {}", e);
            }
        });
    }
}
