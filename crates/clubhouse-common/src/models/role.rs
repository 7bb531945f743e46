//! Role model — who holds which rank.
//!
//! Roles read like a hierarchy but are NOT totally ordered: the authorization
//! tables in `crate::permissions` group ranks irregularly (ClubPresident sits
//! high in the management ladder yet holds almost no direct capabilities).
//! There is deliberately no `Ord` impl and no numeric rank — every check is an
//! explicit table lookup.

use serde::{Deserialize, Serialize};

/// A user's rank, either platform-wide (SystemAdmin, Admin) or within a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator — unconditional access to everything
    SystemAdmin,
    /// Platform administrator — everything except managing SystemAdmins
    Admin,
    /// Honorary club figurehead — high in the management ladder, few direct capabilities
    ClubPresident,
    /// Club leader — at most one per club at any time
    Chairman,
    /// Deputy club leader — a demoted Chairman lands here
    ViceChairman,
    /// Club administrative helper
    ClubOfficer,
    /// Leads a team within a club; owns the events they created
    TeamLeader,
    /// Ordinary club member
    Member,
}

impl Role {
    /// Platform-wide administrator (SystemAdmin or Admin).
    pub fn is_admin(self) -> bool {
        matches!(self, Role::SystemAdmin | Role::Admin)
    }

    /// Ranks the leadership coordinator may assign within a club.
    ///
    /// SystemAdmin, Admin, ClubPresident and ClubOfficer are granted through
    /// other flows and are never valid leadership-assignment targets.
    pub fn is_club_rank(self) -> bool {
        matches!(
            self,
            Role::Chairman | Role::ViceChairman | Role::TeamLeader | Role::Member
        )
    }
}
