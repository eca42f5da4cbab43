//! Audit event entity (database row mapping).

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database row mapping for the audit_log table.
#[derive(Debug, Clone, FromRow)]
pub struct AuditEventEntity {
    pub id: i64,
    pub action: String,
    pub entity: String,
    pub entity_id: i64,
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl From<AuditEventEntity> for domain::models::AuditEvent {
    fn from(entity: AuditEventEntity) -> Self {
        Self {
            id: entity.id,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            metadata: entity.metadata,
            created_at: entity.created_at,
        }
    }
}
