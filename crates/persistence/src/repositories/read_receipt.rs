//! Read receipt repository for database operations.

use domain::models::{ReadReceipt, ReaderEntry};
use sqlx::PgPool;

use crate::entities::{ReadReceiptEntity, ReaderRowEntity};

/// Repository for read receipt database operations.
#[derive(Clone)]
pub struct ReadReceiptRepository {
    pool: PgPool,
}

impl ReadReceiptRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record that a user has read an announcement. Repeat calls are
    /// absorbed by the unique constraint. Returns the created receipt, or
    /// `None` when one already existed (its `read_at` stays untouched).
    pub async fn mark_read(
        &self,
        user_id: i64,
        announcement_id: i64,
    ) -> Result<Option<ReadReceipt>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ReadReceiptEntity>(
            r#"
            INSERT INTO read_receipts (user_id, announcement_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, announcement_id) DO NOTHING
            RETURNING id, user_id, announcement_id, read_at
            "#,
        )
        .bind(user_id)
        .bind(announcement_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Whether a user has a receipt for an announcement.
    pub async fn has_read(&self, user_id: i64, announcement_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM read_receipts WHERE user_id = $1 AND announcement_id = $2)",
        )
        .bind(user_id)
        .bind(announcement_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Count receipts for an announcement.
    pub async fn count_readers(&self, announcement_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM read_receipts WHERE announcement_id = $1")
            .bind(announcement_id)
            .fetch_one(&self.pool)
            .await
    }

    /// List readers of an announcement, most recent first, with a stable id
    /// tiebreak.
    pub async fn list_readers(
        &self,
        announcement_id: i64,
    ) -> Result<Vec<ReaderEntry>, sqlx::Error> {
        let entities = sqlx::query_as::<_, ReaderRowEntity>(
            r#"
            SELECT r.user_id, u.full_name, u.email, d.name AS department, r.read_at
            FROM read_receipts r
            JOIN users u ON u.id = r.user_id
            JOIN departments d ON d.id = u.department_id
            WHERE r.announcement_id = $1
            ORDER BY r.read_at DESC, r.id DESC
            "#,
        )
        .bind(announcement_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }
}
