//! Department domain model.

use serde::{Deserialize, Serialize};

/// A named organizational unit, unique by name. Targeting dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
}
