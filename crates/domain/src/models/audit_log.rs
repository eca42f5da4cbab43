//! Audit log domain models.
//!
//! The audit log is append-only; nothing in this subsystem reads it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Audited actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    AnnouncementCreated,
    AnnouncementRead,
    UserRegistered,
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "announcement_created" => Ok(AuditAction::AnnouncementCreated),
            "announcement_read" => Ok(AuditAction::AnnouncementRead),
            "user_registered" => Ok(AuditAction::UserRegistered),
            _ => Err(format!("Unknown audit action: {}", s)),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::AnnouncementCreated => "announcement_created",
            AuditAction::AnnouncementRead => "announcement_read",
            AuditAction::UserRegistered => "user_registered",
        };
        write!(f, "{}", s)
    }
}

/// A stored audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: i64,
    pub action: String,
    pub entity: String,
    pub entity_id: i64,
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

/// Input for appending an audit event.
#[derive(Debug, Clone)]
pub struct CreateAuditEventInput {
    pub action: AuditAction,
    pub entity: String,
    pub entity_id: i64,
    pub metadata: Option<JsonValue>,
}

impl CreateAuditEventInput {
    pub fn new(action: AuditAction, entity: impl Into<String>, entity_id: i64) -> Self {
        Self {
            action,
            entity: entity.into(),
            entity_id,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Event emitted once per effective first read of an announcement.
    pub fn announcement_read(announcement_id: i64, user_id: i64) -> Self {
        Self::new(AuditAction::AnnouncementRead, "announcement", announcement_id)
            .with_metadata(serde_json::json!({ "userId": user_id }))
    }

    /// Event emitted when an announcement is created.
    pub fn announcement_created(announcement_id: i64, author_id: i64) -> Self {
        Self::new(AuditAction::AnnouncementCreated, "announcement", announcement_id)
            .with_metadata(serde_json::json!({ "authorId": author_id }))
    }
}
