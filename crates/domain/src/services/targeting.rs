//! Targeting resolution: expanding an announcement's target rules into the
//! concrete set of addressed user ids.
//!
//! Resolution is deterministic given the current directory state and is
//! recomputed on every call; the audience of a broadcast announcement grows
//! and shrinks with the user population. An empty rule list is the sentinel
//! for "broadcast to everyone"; "explicitly target nobody" is not
//! expressible in this model.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::models::TargetRule;

/// Target rules partitioned by kind, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPartition {
    pub role_ids: Vec<i64>,
    pub department_ids: Vec<i64>,
    pub user_ids: Vec<i64>,
}

impl TargetPartition {
    pub fn is_empty(&self) -> bool {
        self.role_ids.is_empty() && self.department_ids.is_empty() && self.user_ids.is_empty()
    }
}

/// Partitions rules by kind, dropping duplicates within each partition.
pub fn partition_rules(rules: &[TargetRule]) -> TargetPartition {
    let mut partition = TargetPartition::default();
    for rule in rules {
        let (list, id) = match rule {
            TargetRule::Role(id) => (&mut partition.role_ids, *id),
            TargetRule::Department(id) => (&mut partition.department_ids, *id),
            TargetRule::User(id) => (&mut partition.user_ids, *id),
        };
        if !list.contains(&id) {
            list.push(id);
        }
    }
    partition
}

/// Read-only view of the identity directory, injected into resolution.
///
/// Implemented by the persistence layer's user repository; tests supply an
/// in-memory fake.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Ids of every known user.
    async fn all_user_ids(&self) -> Result<Vec<i64>, sqlx::Error>;

    /// Ids of users whose role is in `role_ids`.
    async fn user_ids_by_roles(&self, role_ids: &[i64]) -> Result<Vec<i64>, sqlx::Error>;

    /// Ids of users whose department is in `department_ids`.
    async fn user_ids_by_departments(&self, department_ids: &[i64])
        -> Result<Vec<i64>, sqlx::Error>;
}

/// Resolves an announcement's audience: the set union of the user sets
/// selected by each rule, or the full population when no rules exist.
///
/// Explicit user-id rules are taken as-is; referencing a user unknown to the
/// directory is harmless (such ids simply never acquire receipts).
pub async fn resolve_audience<D>(
    directory: &D,
    rules: &[TargetRule],
) -> Result<HashSet<i64>, sqlx::Error>
where
    D: UserDirectory + ?Sized,
{
    if rules.is_empty() {
        return Ok(directory.all_user_ids().await?.into_iter().collect());
    }

    let partition = partition_rules(rules);
    let mut audience = HashSet::new();

    if !partition.role_ids.is_empty() {
        audience.extend(directory.user_ids_by_roles(&partition.role_ids).await?);
    }
    if !partition.department_ids.is_empty() {
        audience.extend(
            directory
                .user_ids_by_departments(&partition.department_ids)
                .await?,
        );
    }
    audience.extend(partition.user_ids);

    Ok(audience)
}

/// Whether `user_id` belongs to the announcement's resolved audience.
///
/// Gates both feed listing and mark-read; evaluated fresh per request.
pub async fn is_member<D>(
    directory: &D,
    rules: &[TargetRule],
    user_id: i64,
) -> Result<bool, sqlx::Error>
where
    D: UserDirectory + ?Sized,
{
    Ok(resolve_audience(directory, rules).await?.contains(&user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory directory: (user_id, role_id, department_id) triples.
    struct FakeDirectory {
        users: Vec<(i64, i64, i64)>,
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn all_user_ids(&self) -> Result<Vec<i64>, sqlx::Error> {
            Ok(self.users.iter().map(|(id, _, _)| *id).collect())
        }

        async fn user_ids_by_roles(&self, role_ids: &[i64]) -> Result<Vec<i64>, sqlx::Error> {
            Ok(self
                .users
                .iter()
                .filter(|(_, role, _)| role_ids.contains(role))
                .map(|(id, _, _)| *id)
                .collect())
        }

        async fn user_ids_by_departments(
            &self,
            department_ids: &[i64],
        ) -> Result<Vec<i64>, sqlx::Error> {
            Ok(self
                .users
                .iter()
                .filter(|(_, _, dept)| department_ids.contains(dept))
                .map(|(id, _, _)| *id)
                .collect())
        }
    }

    /// admin=1/employee=2 roles, IT=1/Sales=2 departments.
    fn directory() -> FakeDirectory {
        FakeDirectory {
            users: vec![
                (1, 1, 1), // admin in IT
                (2, 2, 1), // Alice, IT
                (3, 2, 1), // Bob, IT
                (4, 2, 2), // Maria, Sales
                (5, 2, 2), // Pavel, Sales
            ],
        }
    }

    #[test]
    fn test_partition_rules_by_kind() {
        let rules = vec![
            TargetRule::Department(1),
            TargetRule::User(9),
            TargetRule::Role(2),
            TargetRule::Department(2),
        ];
        let partition = partition_rules(&rules);
        assert_eq!(partition.role_ids, vec![2]);
        assert_eq!(partition.department_ids, vec![1, 2]);
        assert_eq!(partition.user_ids, vec![9]);
    }

    #[test]
    fn test_partition_rules_deduplicates() {
        let rules = vec![
            TargetRule::Role(1),
            TargetRule::Role(1),
            TargetRule::User(4),
            TargetRule::User(4),
        ];
        let partition = partition_rules(&rules);
        assert_eq!(partition.role_ids, vec![1]);
        assert_eq!(partition.user_ids, vec![4]);
    }

    #[tokio::test]
    async fn test_empty_rules_is_broadcast_to_everyone() {
        let audience = resolve_audience(&directory(), &[]).await.unwrap();
        assert_eq!(audience, HashSet::from([1, 2, 3, 4, 5]));
    }

    #[tokio::test]
    async fn test_broadcast_audience_is_recomputed_not_cached() {
        let mut dir = directory();
        let before = resolve_audience(&dir, &[]).await.unwrap();
        assert_eq!(before.len(), 5);

        dir.users.push((6, 2, 1));
        let after = resolve_audience(&dir, &[]).await.unwrap();
        assert_eq!(after.len(), 6);
        assert!(after.contains(&6));
    }

    #[tokio::test]
    async fn test_department_rule_selects_members() {
        let rules = vec![TargetRule::Department(1)];
        let audience = resolve_audience(&directory(), &rules).await.unwrap();
        assert_eq!(audience, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_union_across_kinds() {
        let rules = vec![
            TargetRule::Department(2),
            TargetRule::Role(1),
            TargetRule::User(3),
        ];
        let audience = resolve_audience(&directory(), &rules).await.unwrap();
        // Sales (4, 5) ∪ admins (1) ∪ explicit (3)
        assert_eq!(audience, HashSet::from([1, 3, 4, 5]));
    }

    #[tokio::test]
    async fn test_union_is_additive_over_rule_partitions() {
        let dir = directory();
        let dept_rules = vec![TargetRule::Department(1)];
        let user_rules = vec![TargetRule::User(4)];
        let combined: Vec<TargetRule> = dept_rules
            .iter()
            .chain(user_rules.iter())
            .copied()
            .collect();

        let a = resolve_audience(&dir, &dept_rules).await.unwrap();
        let b = resolve_audience(&dir, &user_rules).await.unwrap();
        let both = resolve_audience(&dir, &combined).await.unwrap();

        let expected: HashSet<i64> = a.union(&b).copied().collect();
        assert_eq!(both, expected);
    }

    #[tokio::test]
    async fn test_overlapping_rules_deduplicate_members() {
        // User 2 is in IT and also explicitly targeted.
        let rules = vec![TargetRule::Department(1), TargetRule::User(2)];
        let audience = resolve_audience(&directory(), &rules).await.unwrap();
        assert_eq!(audience, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_rule_for_empty_department_selects_nothing() {
        let rules = vec![TargetRule::Department(42)];
        let audience = resolve_audience(&directory(), &rules).await.unwrap();
        assert!(audience.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_explicit_user_id_passes_through() {
        // No existence check on user-kind rules.
        let rules = vec![TargetRule::User(999)];
        let audience = resolve_audience(&directory(), &rules).await.unwrap();
        assert_eq!(audience, HashSet::from([999]));
    }

    #[tokio::test]
    async fn test_is_member() {
        let dir = directory();
        let rules = vec![TargetRule::Department(1)];
        assert!(is_member(&dir, &rules, 2).await.unwrap());
        assert!(!is_member(&dir, &rules, 4).await.unwrap());
        // Broadcast reaches everyone.
        assert!(is_member(&dir, &[], 4).await.unwrap());
    }
}
