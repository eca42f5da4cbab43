//! Read receipt entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the read_receipts table.
#[derive(Debug, Clone, FromRow)]
pub struct ReadReceiptEntity {
    pub id: i64,
    pub user_id: i64,
    pub announcement_id: i64,
    pub read_at: DateTime<Utc>,
}

impl From<ReadReceiptEntity> for domain::models::ReadReceipt {
    fn from(entity: ReadReceiptEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            announcement_id: entity.announcement_id,
            read_at: entity.read_at,
        }
    }
}

/// Reader row joined with user identity and department name.
#[derive(Debug, Clone, FromRow)]
pub struct ReaderRowEntity {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub read_at: DateTime<Utc>,
}

impl From<ReaderRowEntity> for domain::models::ReaderEntry {
    fn from(entity: ReaderRowEntity) -> Self {
        Self {
            user_id: entity.user_id,
            full_name: entity.full_name,
            email: entity.email,
            department: entity.department,
            read_at: entity.read_at,
        }
    }
}
