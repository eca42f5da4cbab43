//! Announcement entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{AnnouncementSummary, TargetRule, UserSummary};
use sqlx::FromRow;

/// Database row mapping for the announcements table.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementEntity {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<AnnouncementEntity> for domain::models::Announcement {
    fn from(entity: AnnouncementEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            author_id: entity.author_id,
            created_at: entity.created_at,
        }
    }
}

/// Announcement row joined with the author's identity.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementWithAuthorEntity {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author_full_name: String,
    pub author_email: String,
}

impl From<AnnouncementWithAuthorEntity> for AnnouncementSummary {
    fn from(entity: AnnouncementWithAuthorEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            author: UserSummary {
                id: entity.author_id,
                full_name: entity.author_full_name,
                email: entity.author_email,
            },
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the announcement_targets table.
///
/// Storage encodes the `TargetRule` sum type as three nullable columns with
/// a CHECK that exactly one is set; decoding re-establishes the sum type.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementTargetEntity {
    pub id: i64,
    pub announcement_id: i64,
    pub role_id: Option<i64>,
    pub department_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl TryFrom<AnnouncementTargetEntity> for TargetRule {
    type Error = String;

    fn try_from(entity: AnnouncementTargetEntity) -> Result<Self, Self::Error> {
        match (entity.role_id, entity.department_id, entity.user_id) {
            (Some(id), None, None) => Ok(TargetRule::Role(id)),
            (None, Some(id), None) => Ok(TargetRule::Department(id)),
            (None, None, Some(id)) => Ok(TargetRule::User(id)),
            _ => Err(format!(
                "announcement_targets row {} violates the one-kind invariant",
                entity.id
            )),
        }
    }
}
