//! Role domain model.
//!
//! Roles are a closed organizational vocabulary (seeded at migration time)
//! and double as a targeting dimension for announcements.

use serde::{Deserialize, Serialize};

/// Name of the distinguished administrator role.
pub const ADMIN_ROLE_NAME: &str = "admin";

/// Name of the default role assigned at registration.
pub const EMPLOYEE_ROLE_NAME: &str = "employee";

/// A named user role, unique by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Ids of the well-known roles, resolved once at startup.
///
/// Handlers compare against these ids instead of re-querying roles by name
/// on every request.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownRoles {
    pub admin_id: i64,
    pub employee_id: i64,
}

impl WellKnownRoles {
    pub fn is_admin(&self, role_id: i64) -> bool {
        role_id == self.admin_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let roles = WellKnownRoles {
            admin_id: 1,
            employee_id: 2,
        };
        assert!(roles.is_admin(1));
        assert!(!roles.is_admin(2));
        assert!(!roles.is_admin(99));
    }

    #[test]
    fn test_role_serializes_camel_case() {
        let role = Role {
            id: 1,
            name: ADMIN_ROLE_NAME.to_string(),
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "admin");
    }
}
