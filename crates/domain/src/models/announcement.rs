//! Announcement domain models.
//!
//! An announcement is immutable once created. Its audience is described by
//! zero or more target rules; an announcement with no rules is a broadcast
//! addressed to the entire user population.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::pagination::PageInfo;
use shared::validation::{validate_id_list, validate_not_blank};
use validator::Validate;

use crate::models::read_receipt::ReaderEntry;
use crate::models::user::UserSummary;

/// One audience-selection criterion. An announcement's full audience is the
/// union of the user sets selected by each of its rules.
///
/// Stored as three mutually-exclusive nullable columns; that shape is a
/// persistence detail and never leaks past the entity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum TargetRule {
    /// Every user holding the role.
    Role(i64),
    /// Every user in the department.
    Department(i64),
    /// A single explicit user.
    User(i64),
}

/// Target lists as they appear in the create-announcement payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TargetSelection {
    #[serde(default)]
    #[validate(custom(function = "validate_id_list"))]
    pub roles: Vec<i64>,
    #[serde(default)]
    #[validate(custom(function = "validate_id_list"))]
    pub departments: Vec<i64>,
    #[serde(default)]
    #[validate(custom(function = "validate_id_list"))]
    pub users: Vec<i64>,
}

impl TargetSelection {
    /// Converts the wire shape into deduplicated target rules.
    ///
    /// Duplicate ids within a list collapse; set union makes any remaining
    /// duplicates harmless anyway.
    pub fn into_rules(self) -> Vec<TargetRule> {
        let mut rules = Vec::new();
        let mut push_unique = |rule: TargetRule| {
            if !rules.contains(&rule) {
                rules.push(rule);
            }
        };
        for id in self.roles {
            push_unique(TargetRule::Role(id));
        }
        for id in self.departments {
            push_unique(TargetRule::Department(id));
        }
        for id in self.users {
            push_unique(TargetRule::User(id));
        }
        rules
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.departments.is_empty() && self.users.is_empty()
    }
}

/// An announcement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Announcement with author identity, as returned in the feed and detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementSummary {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

/// Compact announcement identity used in the stats response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementHeader {
    pub id: i64,
    pub title: String,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

/// Create-announcement request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body must not be empty"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,
    #[serde(default)]
    #[validate(nested)]
    pub targets: TargetSelection,
}

/// Response body for the feed listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAnnouncementsResponse {
    pub items: Vec<AnnouncementSummary>,
    pub pagination: PageInfo,
}

/// Detail response: announcement plus the caller's read state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDetailResponse {
    #[serde(flatten)]
    pub announcement: AnnouncementSummary,
    pub is_read: bool,
}

/// Aggregate read statistics for one announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadStats {
    pub total_target_users: i64,
    pub read_count: i64,
    pub unread_count: i64,
    pub read_percentage: i64,
    pub has_targets: bool,
}

/// Full statistics response: public summary, counters and the readers list.
///
/// Only users who *have* read are enumerated; non-readers stay aggregate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementStatsResponse {
    pub announcement: AnnouncementHeader,
    pub stats: ReadStats,
    pub readers: Vec<ReaderEntry>,
}
