//! Read-statistics arithmetic and the access gate for viewing them.

use crate::models::{ReadStats, WellKnownRoles};

/// Whether the requester may view an announcement's read statistics.
///
/// Allowed for admins and for the announcement's author; checked against the
/// requester's *current* role on every call.
pub fn can_view_stats(
    requester_id: i64,
    requester_role_id: i64,
    author_id: i64,
    roles: &WellKnownRoles,
) -> bool {
    roles.is_admin(requester_role_id) || requester_id == author_id
}

/// Computes the aggregate counters from the resolved audience size and the
/// recorded reader count.
///
/// `unread_count` saturates at zero: receipts are never deleted, so a
/// shrinking audience could otherwise drive it negative. The percentage is
/// round-half-up of `read_count / total * 100`, computed from the unclamped
/// counts; an empty audience yields 0.
pub fn compute_read_stats(total_target_users: i64, read_count: i64, has_targets: bool) -> ReadStats {
    let read_percentage = if total_target_users > 0 {
        (read_count * 200 + total_target_users) / (2 * total_target_users)
    } else {
        0
    };

    ReadStats {
        total_target_users,
        read_count,
        unread_count: (total_target_users - read_count).max(0),
        read_percentage,
        has_targets,
    }
}
