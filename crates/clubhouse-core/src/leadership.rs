//! Club leadership succession.
//!
//! Assigns and demotes club ranks against the user store while preserving the
//! single-Chairman invariant: a club holds at most one Chairman at any time,
//! and promoting a new one demotes the incumbent to ViceChairman in the same
//! atomic write.
//!
//! Every precondition failure (bad id, non-club rank, missing user,
//! non-member target, missing club) is a normal `Ok(false)` — callers check
//! the return value. Only collaborator I/O failures surface as errors.

use clubhouse_common::error::ClubResult;
use clubhouse_common::models::Role;

use crate::store::UserStore;

/// Stateful workflow over the user store. Holds no state of its own — the
/// leadership roster lives entirely in the stored user records.
pub struct LeadershipCoordinator<S> {
    store: S,
}

impl<S: UserStore> LeadershipCoordinator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assign a club rank to an existing member of the club.
    ///
    /// Assigning Chairman demotes a different incumbent Chairman to
    /// ViceChairman; both rows persist through one atomic batch write.
    /// Re-assigning a user their current rank is a no-op that returns `true`.
    pub async fn assign_leadership(
        &self,
        club_id: i64,
        user_id: i64,
        role: Role,
    ) -> ClubResult<bool> {
        if club_id <= 0 || user_id <= 0 {
            tracing::warn!(club_id, user_id, "leadership assignment with invalid ids");
            return Ok(false);
        }
        if !role.is_club_rank() {
            tracing::warn!(?role, "leadership assignment with a non-club rank");
            return Ok(false);
        }

        let Some(mut user) = self.store.find_by_id(user_id).await? else {
            return Ok(false);
        };
        if !user.is_member_of(club_id) {
            tracing::debug!(user_id, club_id, "assignment target is not a club member");
            return Ok(false);
        }

        if role == Role::Chairman {
            if let Some(mut incumbent) = self.store.find_chairman(club_id).await? {
                if incumbent.id != user_id {
                    incumbent.role = Role::ViceChairman;
                    user.role = Role::Chairman;
                    self.store.save_batch(&[incumbent.clone(), user]).await?;
                    tracing::debug!(
                        club_id,
                        user_id,
                        demoted = incumbent.id,
                        "chairman replaced, incumbent demoted to vice chairman"
                    );
                    return Ok(true);
                }
            }
        }

        user.role = role;
        self.store.save(&user).await?;
        tracing::debug!(club_id, user_id, ?role, "leadership assigned");
        Ok(true)
    }

    /// Put a user into a club with the given rank.
    ///
    /// Applies the requested rank whether or not the user already belongs to
    /// the club. (The legacy flow silently kept the old rank for existing
    /// members; that was a defect, not a contract.)
    pub async fn add_user_to_club(
        &self,
        user_id: i64,
        club_id: i64,
        role: Role,
    ) -> ClubResult<bool> {
        if user_id <= 0 || club_id <= 0 {
            return Ok(false);
        }
        if !role.is_club_rank() {
            tracing::warn!(?role, "club membership with a non-club rank");
            return Ok(false);
        }

        let Some(mut user) = self.store.find_by_id(user_id).await? else {
            return Ok(false);
        };
        if !self.store.club_exists(club_id).await? {
            tracing::debug!(club_id, "membership assignment against unknown club");
            return Ok(false);
        }

        user.club_id = Some(club_id);
        user.role = role;
        self.store.save(&user).await?;
        tracing::debug!(user_id, club_id, ?role, "user added to club");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;
    use chrono::Utc;
    use clubhouse_common::models::User;

    fn user(id: i64, role: Role, club_id: Option<i64>) -> User {
        let now = Utc::now();
        User {
            id,
            username: format!("user{id}"),
            display_name: None,
            password_hash: "hash".into(),
            role,
            club_id,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn coordinator_with(users: Vec<User>, clubs: &[i64]) -> LeadershipCoordinator<MemoryUserStore> {
        let store = MemoryUserStore::new();
        for u in users {
            store.insert_user(u);
        }
        for &c in clubs {
            store.insert_club(c);
        }
        LeadershipCoordinator::new(store)
    }

    #[tokio::test]
    async fn test_chairman_succession_demotes_incumbent() {
        // Alice chairs club 1; promoting Bob demotes her to ViceChairman
        let coord = coordinator_with(
            vec![user(1, Role::Chairman, Some(1)), user(2, Role::Member, Some(1))],
            &[1],
        );

        assert!(coord.assign_leadership(1, 2, Role::Chairman).await.unwrap());

        let alice = coord.store().user(1).unwrap();
        let bob = coord.store().user(2).unwrap();
        assert_eq!(alice.role, Role::ViceChairman);
        assert_eq!(bob.role, Role::Chairman);
    }

    #[tokio::test]
    async fn test_first_chairman_needs_no_demotion() {
        let coord = coordinator_with(vec![user(1, Role::Member, Some(1))], &[1]);
        assert!(coord.assign_leadership(1, 1, Role::Chairman).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().role, Role::Chairman);
    }

    #[tokio::test]
    async fn test_self_reassignment_is_idempotent() {
        let coord = coordinator_with(
            vec![user(1, Role::Chairman, Some(1)), user(2, Role::Member, Some(1))],
            &[1],
        );

        assert!(coord.assign_leadership(1, 1, Role::Chairman).await.unwrap());

        // roster unchanged: one chairman, no stray vice chairmen
        assert_eq!(coord.store().user(1).unwrap().role, Role::Chairman);
        assert_eq!(coord.store().user(2).unwrap().role, Role::Member);
    }

    #[tokio::test]
    async fn test_non_member_target_fails_without_mutation() {
        // user 5 belongs to club 2, assignment is for club 1
        let coord = coordinator_with(
            vec![user(1, Role::Chairman, Some(1)), user(5, Role::Member, Some(2))],
            &[1, 2],
        );

        assert!(!coord.assign_leadership(1, 5, Role::Chairman).await.unwrap());

        assert_eq!(coord.store().user(5).unwrap().role, Role::Member);
        assert_eq!(coord.store().user(1).unwrap().role, Role::Chairman);
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_fast() {
        let coord = coordinator_with(vec![user(1, Role::Member, Some(1))], &[1]);
        assert!(!coord.assign_leadership(0, 1, Role::Chairman).await.unwrap());
        assert!(!coord.assign_leadership(1, -4, Role::Chairman).await.unwrap());
        assert!(!coord.assign_leadership(-1, 0, Role::Member).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_club_rank_is_rejected() {
        let coord = coordinator_with(vec![user(1, Role::Member, Some(1))], &[1]);
        assert!(!coord.assign_leadership(1, 1, Role::Admin).await.unwrap());
        assert!(!coord.assign_leadership(1, 1, Role::SystemAdmin).await.unwrap());
        assert!(!coord.assign_leadership(1, 1, Role::ClubOfficer).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().role, Role::Member);
    }

    #[tokio::test]
    async fn test_missing_user_fails() {
        let coord = coordinator_with(vec![], &[1]);
        assert!(!coord.assign_leadership(1, 99, Role::Member).await.unwrap());
    }

    #[tokio::test]
    async fn test_at_most_one_chairman_across_sequences() {
        let coord = coordinator_with(
            vec![
                user(1, Role::Member, Some(1)),
                user(2, Role::Member, Some(1)),
                user(3, Role::Member, Some(1)),
            ],
            &[1],
        );

        let moves = [
            (1, Role::Chairman),
            (2, Role::Chairman),
            (3, Role::TeamLeader),
            (3, Role::Chairman),
            (1, Role::Member),
            (2, Role::Chairman),
        ];
        for (uid, role) in moves {
            assert!(coord.assign_leadership(1, uid, role).await.unwrap());
            let chairmen = coord.store().club_members_with_role(1, Role::Chairman);
            assert!(chairmen.len() <= 1, "two chairmen after ({uid}, {role:?})");
        }
    }

    #[tokio::test]
    async fn test_succession_scoped_to_one_club() {
        let coord = coordinator_with(
            vec![
                user(1, Role::Chairman, Some(1)),
                user(2, Role::Chairman, Some(2)),
                user(3, Role::Member, Some(1)),
            ],
            &[1, 2],
        );

        assert!(coord.assign_leadership(1, 3, Role::Chairman).await.unwrap());

        // club 2's chairman is untouched
        assert_eq!(coord.store().user(2).unwrap().role, Role::Chairman);
    }

    #[tokio::test]
    async fn test_demotion_to_member() {
        let coord = coordinator_with(vec![user(1, Role::Chairman, Some(1))], &[1]);
        assert!(coord.assign_leadership(1, 1, Role::Member).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().role, Role::Member);
        assert!(coord
            .store()
            .club_members_with_role(1, Role::Chairman)
            .is_empty());
    }

    #[tokio::test]
    async fn test_add_user_to_club() {
        let coord = coordinator_with(vec![user(1, Role::Member, None)], &[1]);
        assert!(coord.add_user_to_club(1, 1, Role::TeamLeader).await.unwrap());

        let u = coord.store().user(1).unwrap();
        assert_eq!(u.club_id, Some(1));
        assert_eq!(u.role, Role::TeamLeader);
    }

    #[tokio::test]
    async fn test_add_user_to_missing_club_or_user() {
        let coord = coordinator_with(vec![user(1, Role::Member, None)], &[1]);
        assert!(!coord.add_user_to_club(1, 9, Role::Member).await.unwrap());
        assert!(!coord.add_user_to_club(42, 1, Role::Member).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().club_id, None);
    }

    #[tokio::test]
    async fn test_readding_member_applies_role() {
        // Pins the succession fix: the legacy flow kept the old rank when the
        // user was already a member; re-adding now applies the requested rank.
        let coord = coordinator_with(vec![user(1, Role::Member, Some(1))], &[1]);
        assert!(coord.add_user_to_club(1, 1, Role::ViceChairman).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().role, Role::ViceChairman);
    }

    #[tokio::test]
    async fn test_add_user_rejects_non_club_rank() {
        let coord = coordinator_with(vec![user(1, Role::Member, None)], &[1]);
        assert!(!coord.add_user_to_club(1, 1, Role::Admin).await.unwrap());
        assert_eq!(coord.store().user(1).unwrap().club_id, None);
    }
}
