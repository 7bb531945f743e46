//! Async authorization dispatch over the user store.
//!
//! Loads the acting user by id and routes a named action onto the pure
//! checks in `clubhouse_common::permissions`. A missing or inactive user
//! denies; only store I/O failures surface as errors.

use clubhouse_common::error::ClubResult;
use clubhouse_common::permissions::{self, Capability};

use crate::store::UserStore;

/// Named actions callers ask about. A closed enum — the legacy string
/// dispatch ("ManageUsers", "ViewReports", ...) with its unknown-name-denies
/// branch is gone by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    ViewDashboard,
    ManageUsers,
    ManageClubs,
    ManageEvents,
    ViewReports,
    GenerateReports,
}

pub struct Authorizer<S> {
    store: S,
}

impl<S: UserStore> Authorizer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the user may perform the action, optionally against a
    /// specific club's resource. `resource_club = None` asks the coarse
    /// role-level question (or, for reports, means a system-wide report).
    pub async fn is_authorized(
        &self,
        user_id: i64,
        action: AuthAction,
        resource_club: Option<i64>,
    ) -> ClubResult<bool> {
        let Some(user) = self.store.find_by_id(user_id).await? else {
            tracing::debug!(user_id, "authorization check for unknown user");
            return Ok(false);
        };
        if !user.active {
            tracing::debug!(user_id, "authorization check for inactive user");
            return Ok(false);
        }

        Ok(match action {
            AuthAction::ViewDashboard => true,
            AuthAction::ManageUsers => {
                permissions::can_access(user.role, Capability::UserManagement)
            }
            AuthAction::ManageClubs => match resource_club {
                Some(club) => permissions::can_manage_club(user.role, user.club_id, Some(club)),
                None => permissions::can_access(user.role, Capability::ClubManagement),
            },
            AuthAction::ManageEvents => match resource_club {
                Some(club) => permissions::can_manage_event(user.role, user.club_id, Some(club)),
                None => permissions::can_access(user.role, Capability::EventManagement),
            },
            AuthAction::ViewReports => {
                permissions::can_view_reports(user.role, user.club_id, resource_club)
            }
            AuthAction::GenerateReports => permissions::can_generate_reports(user.role),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;
    use chrono::Utc;
    use clubhouse_common::models::{Role, User};

    fn user(id: i64, role: Role, club_id: Option<i64>, active: bool) -> User {
        let now = Utc::now();
        User {
            id,
            username: format!("user{id}"),
            display_name: None,
            password_hash: "hash".into(),
            role,
            club_id,
            active,
            created_at: now,
            updated_at: now,
        }
    }

    fn authorizer_with(users: Vec<User>) -> Authorizer<MemoryUserStore> {
        let store = MemoryUserStore::new();
        for u in users {
            store.insert_user(u);
        }
        Authorizer::new(store)
    }

    #[tokio::test]
    async fn test_unknown_user_denied() {
        let auth = authorizer_with(vec![]);
        assert!(!auth
            .is_authorized(99, AuthAction::ViewDashboard, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_inactive_user_denied_everything() {
        let auth = authorizer_with(vec![user(1, Role::SystemAdmin, None, false)]);
        for action in [
            AuthAction::ViewDashboard,
            AuthAction::ManageUsers,
            AuthAction::GenerateReports,
        ] {
            assert!(!auth.is_authorized(1, action, None).await.unwrap(), "{action:?}");
        }
    }

    #[tokio::test]
    async fn test_dashboard_open_to_all_active_users() {
        let auth = authorizer_with(vec![user(1, Role::Member, Some(1), true)]);
        assert!(auth
            .is_authorized(1, AuthAction::ViewDashboard, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_club_scoped_management() {
        let auth = authorizer_with(vec![user(1, Role::ClubOfficer, Some(3), true)]);
        assert!(auth
            .is_authorized(1, AuthAction::ManageClubs, Some(3))
            .await
            .unwrap());
        assert!(!auth
            .is_authorized(1, AuthAction::ManageClubs, Some(4))
            .await
            .unwrap());
        // Officers hold no coarse club-management capability
        assert!(!auth
            .is_authorized(1, AuthAction::ManageClubs, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_report_dispatch() {
        let auth = authorizer_with(vec![
            user(1, Role::ViceChairman, Some(3), true),
            user(2, Role::TeamLeader, Some(3), true),
        ]);
        // system-wide report: senior ranks yes, team leaders no
        assert!(auth
            .is_authorized(1, AuthAction::ViewReports, None)
            .await
            .unwrap());
        assert!(!auth
            .is_authorized(2, AuthAction::ViewReports, None)
            .await
            .unwrap());
        // own-club report: both
        assert!(auth
            .is_authorized(2, AuthAction::ViewReports, Some(3))
            .await
            .unwrap());
        // generation stays admin-only
        assert!(!auth
            .is_authorized(1, AuthAction::GenerateReports, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_event_management_includes_team_leaders() {
        let auth = authorizer_with(vec![user(1, Role::TeamLeader, Some(2), true)]);
        assert!(auth
            .is_authorized(1, AuthAction::ManageEvents, Some(2))
            .await
            .unwrap());
        assert!(!auth
            .is_authorized(1, AuthAction::ManageEvents, Some(5))
            .await
            .unwrap());
    }
}
