//! Announcement repository for database operations.
//!
//! Visibility is evaluated in SQL: an announcement with no target rows is
//! visible to everyone, otherwise at least one row must match the viewer's
//! role, department, or id.

use domain::models::{Announcement, AnnouncementSummary, AuthUser, TargetRule};
use sqlx::PgPool;

use crate::entities::{
    AnnouncementEntity, AnnouncementTargetEntity, AnnouncementWithAuthorEntity,
};

const VISIBILITY_CLAUSE: &str = r#"
    (
        NOT EXISTS (SELECT 1 FROM announcement_targets t WHERE t.announcement_id = a.id)
        OR EXISTS (
            SELECT 1 FROM announcement_targets t
            WHERE t.announcement_id = a.id
              AND (t.role_id = $1 OR t.department_id = $2 OR t.user_id = $3)
        )
    )
"#;

/// Repository for announcement database operations.
#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an announcement and its target rows in one transaction.
    pub async fn create(
        &self,
        author_id: i64,
        title: &str,
        body: &str,
        rules: &[TargetRule],
    ) -> Result<Announcement, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, AnnouncementEntity>(
            r#"
            INSERT INTO announcements (title, body, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, author_id, created_at
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        for rule in rules {
            let (role_id, department_id, user_id) = match rule {
                TargetRule::Role(id) => (Some(*id), None, None),
                TargetRule::Department(id) => (None, Some(*id), None),
                TargetRule::User(id) => (None, None, Some(*id)),
            };
            sqlx::query(
                r#"
                INSERT INTO announcement_targets (announcement_id, role_id, department_id, user_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(entity.id)
            .bind(role_id)
            .bind(department_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(entity.into())
    }

    /// Find an announcement by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Announcement>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AnnouncementEntity>(
            "SELECT id, title, body, author_id, created_at FROM announcements WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Find an announcement with its author's identity resolved.
    pub async fn find_with_author(
        &self,
        id: i64,
    ) -> Result<Option<AnnouncementSummary>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AnnouncementWithAuthorEntity>(
            r#"
            SELECT a.id, a.title, a.body, a.author_id, a.created_at,
                   u.full_name AS author_full_name, u.email AS author_email
            FROM announcements a
            JOIN users u ON u.id = a.author_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Load an announcement's target rules.
    pub async fn load_targets(&self, announcement_id: i64) -> Result<Vec<TargetRule>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AnnouncementTargetEntity>(
            r#"
            SELECT id, announcement_id, role_id, department_id, user_id
            FROM announcement_targets
            WHERE announcement_id = $1
            ORDER BY id
            "#,
        )
        .bind(announcement_id)
        .fetch_all(&self.pool)
        .await?;

        entities
            .into_iter()
            .map(|entity| TargetRule::try_from(entity).map_err(|e| sqlx::Error::Decode(e.into())))
            .collect()
    }

    /// Whether a single announcement is visible to the viewer.
    pub async fn is_visible_to(
        &self,
        announcement_id: i64,
        viewer: AuthUser,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM announcements a WHERE a.id = $4 AND {VISIBILITY_CLAUSE})",
        );
        sqlx::query_scalar(&query)
            .bind(viewer.role_id)
            .bind(viewer.department_id)
            .bind(viewer.id)
            .bind(announcement_id)
            .fetch_one(&self.pool)
            .await
    }

    /// List announcements visible to the viewer, newest first, with a stable
    /// id tiebreak.
    pub async fn list_visible_to(
        &self,
        viewer: AuthUser,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AnnouncementSummary>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT a.id, a.title, a.body, a.author_id, a.created_at,
                   u.full_name AS author_full_name, u.email AS author_email
            FROM announcements a
            JOIN users u ON u.id = a.author_id
            WHERE {VISIBILITY_CLAUSE}
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $4 OFFSET $5
            "#,
        );
        let entities = sqlx::query_as::<_, AnnouncementWithAuthorEntity>(&query)
            .bind(viewer.role_id)
            .bind(viewer.department_id)
            .bind(viewer.id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Count announcements visible to the viewer.
    pub async fn count_visible_to(&self, viewer: AuthUser) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM announcements a WHERE {VISIBILITY_CLAUSE}",
        );
        sqlx::query_scalar(&query)
            .bind(viewer.role_id)
            .bind(viewer.department_id)
            .bind(viewer.id)
            .fetch_one(&self.pool)
            .await
    }
}
