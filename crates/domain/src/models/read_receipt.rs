//! Read receipt domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fact "user U has read announcement A at time T".
///
/// Unique per (user, announcement); a repeated read never changes `read_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadReceipt {
    pub id: i64,
    pub user_id: i64,
    pub announcement_id: i64,
    pub read_at: DateTime<Utc>,
}

/// One reader row in the statistics response: identity, department name and
/// read timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderEntry {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub read_at: DateTime<Utc>,
}
