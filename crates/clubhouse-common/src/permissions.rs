//! Permission system — explicit decision tables, no hidden gotchas.
//!
//! Every check here is a pure function of its arguments: no I/O, no shared
//! state, no errors. Denial is a normal `false` return. Callers run the
//! relevant check before invoking any mutating workflow; the workflows
//! themselves do not re-check.
//!
//! The tables are intentionally NOT a numeric rank comparison. The role set
//! reads like a hierarchy, but several checks group ranks irregularly
//! (ClubPresident sits between Admin and Chairman in the management ladder
//! while holding almost no direct capabilities, and reports group
//! ClubPresident/Chairman/ViceChairman apart from ClubOfficer/TeamLeader).
//! Collapsing this into `rank(a) >= rank(b)` would silently change behavior
//! on those edges.

use crate::error::ClubError;
use crate::models::role::Role;

/// The acting entity behind a request: a role plus an optional club
/// affiliation. Constructed per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub club_id: Option<i64>,
}

impl Principal {
    pub fn new(role: Role, club_id: Option<i64>) -> Self {
        Self { role, club_id }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Whether a (possibly absent) principal is a platform administrator.
pub fn is_admin(principal: Option<&Principal>) -> bool {
    principal.is_some_and(Principal::is_admin)
}

/// Club equality over optional affiliations. Both sides must be present:
/// an unaffiliated principal never passes a same-club gate.
fn same_club(a: Option<i64>, b: Option<i64>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

// ── User capabilities ─────────────────────────────────────────────────────────

/// Admins unconditionally; Chairman may create users within their own club
/// (the club scoping is validated by the user-creation flow, not here).
pub fn can_create_users(role: Role) -> bool {
    matches!(role, Role::SystemAdmin | Role::Admin | Role::Chairman)
}

/// Admins unconditionally; Chairman within their own club; anyone may edit
/// themselves if they are a plain Member.
pub fn can_edit_users(
    role: Role,
    user_club: Option<i64>,
    target_user_club: Option<i64>,
    is_self: bool,
) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::Chairman => same_club(user_club, target_user_club),
        Role::Member => is_self,
        _ => false,
    }
}

pub fn can_delete_users(role: Role) -> bool {
    role.is_admin()
}

/// Admins unconditionally; Chairman for the club-rank subset (the allowed
/// target roles are validated by the assignment flow, not here).
pub fn can_assign_roles(role: Role) -> bool {
    matches!(role, Role::SystemAdmin | Role::Admin | Role::Chairman)
}

// ── Club capabilities ─────────────────────────────────────────────────────────

pub fn can_create_clubs(role: Role) -> bool {
    role.is_admin()
}

pub fn can_delete_clubs(role: Role) -> bool {
    role.is_admin()
}

pub fn can_edit_clubs(role: Role, user_club: Option<i64>, target_club: Option<i64>) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::Chairman => same_club(user_club, target_club),
        _ => false,
    }
}

// ── Event capabilities ────────────────────────────────────────────────────────

pub fn can_create_events(role: Role) -> bool {
    matches!(role, Role::SystemAdmin | Role::Admin | Role::Chairman)
}

/// Admins, Chairman and ViceChairman edit any event; a TeamLeader only the
/// events they created.
pub fn can_edit_events(role: Role, is_own_event: bool) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin | Role::Chairman | Role::ViceChairman => true,
        Role::TeamLeader => is_own_event,
        _ => false,
    }
}

/// Narrower than editing: ViceChairman may edit events but not delete them.
pub fn can_delete_events(role: Role, is_own_event: bool) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin | Role::Chairman => true,
        Role::TeamLeader => is_own_event,
        _ => false,
    }
}

/// Every role may join or register for events.
pub fn can_join_events(_role: Role) -> bool {
    true
}

// ── Reports & settings ────────────────────────────────────────────────────────

pub fn can_generate_reports(role: Role) -> bool {
    role.is_admin()
}

pub fn can_export_reports(role: Role) -> bool {
    role.is_admin()
}

pub fn can_view_statistics(role: Role) -> bool {
    role.is_admin()
}

pub fn can_access_global_settings(role: Role) -> bool {
    role.is_admin()
}

pub fn can_access_club_settings(
    role: Role,
    user_club: Option<i64>,
    target_club: Option<i64>,
) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::Chairman => same_club(user_club, target_club),
        _ => false,
    }
}

// ── Hierarchical management ───────────────────────────────────────────────────

/// Whether one user may manage (promote, discipline, reassign) another.
///
/// This is the irregular seniority ladder: each club-scoped rank manages
/// same-club users outside its exclusion set. Admin ranks are club-agnostic.
pub fn can_manage_user(
    role: Role,
    user_club: Option<i64>,
    target_role: Role,
    target_club: Option<i64>,
) -> bool {
    match role {
        Role::SystemAdmin => true,
        Role::Admin => target_role != Role::SystemAdmin,
        Role::ClubPresident => {
            same_club(user_club, target_club)
                && !matches!(target_role, Role::SystemAdmin | Role::Admin)
        }
        Role::Chairman => {
            same_club(user_club, target_club)
                && !matches!(
                    target_role,
                    Role::SystemAdmin | Role::Admin | Role::ClubPresident
                )
        }
        Role::ViceChairman => {
            same_club(user_club, target_club)
                && !matches!(
                    target_role,
                    Role::SystemAdmin | Role::Admin | Role::ClubPresident | Role::Chairman
                )
        }
        Role::ClubOfficer => {
            same_club(user_club, target_club)
                && matches!(target_role, Role::TeamLeader | Role::Member)
        }
        Role::TeamLeader => same_club(user_club, target_club) && target_role == Role::Member,
        Role::Member => false,
    }
}

pub fn can_manage_club(role: Role, user_club: Option<i64>, target_club: Option<i64>) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::ClubPresident | Role::Chairman | Role::ViceChairman | Role::ClubOfficer => {
            same_club(user_club, target_club)
        }
        _ => false,
    }
}

/// As [`can_manage_club`], additionally including TeamLeader.
pub fn can_manage_event(role: Role, user_club: Option<i64>, event_club: Option<i64>) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::ClubPresident
        | Role::Chairman
        | Role::ViceChairman
        | Role::ClubOfficer
        | Role::TeamLeader => same_club(user_club, event_club),
        _ => false,
    }
}

/// `report_club = None` means a system-wide report. Senior club ranks may
/// view those; ClubOfficer and TeamLeader need an exact club match.
pub fn can_view_reports(role: Role, user_club: Option<i64>, report_club: Option<i64>) -> bool {
    match role {
        Role::SystemAdmin | Role::Admin => true,
        Role::ClubPresident | Role::Chairman | Role::ViceChairman => {
            report_club.is_none() || same_club(user_club, report_club)
        }
        Role::ClubOfficer | Role::TeamLeader => same_club(user_club, report_club),
        Role::Member => false,
    }
}

// ── Visibility ────────────────────────────────────────────────────────────────

pub fn can_view_club(role: Role) -> bool {
    role != Role::Member
}

pub fn can_view_user(role: Role) -> bool {
    role != Role::Member
}

/// Asymmetric with club/user visibility by design: events are public to
/// every role.
pub fn can_view_event(_role: Role) -> bool {
    true
}

// ── Capability dispatch ───────────────────────────────────────────────────────

/// Named capabilities for feature gating (menu items, navigation, command
/// enablement). A closed enum — the legacy "unknown feature string denies"
/// branch disappears by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    CreateUsers,
    DeleteUsers,
    AssignRoles,
    CreateClubs,
    DeleteClubs,
    CreateEvents,
    JoinEvents,
    GenerateReports,
    ExportReports,
    ViewStatistics,
    GlobalSettings,
    /// Always visible, for every role
    Dashboard,
    /// Composite: any user-administration capability
    UserManagement,
    /// Composite: any club-administration capability
    ClubManagement,
    /// Composite: any event-administration capability
    EventManagement,
}

/// Role-level feature gate. Context-dependent checks (same-club, self,
/// event ownership) answer "could this role ever do it" here; the precise
/// check runs at the point of action.
pub fn can_access(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::CreateUsers => can_create_users(role),
        Capability::DeleteUsers => can_delete_users(role),
        Capability::AssignRoles => can_assign_roles(role),
        Capability::CreateClubs => can_create_clubs(role),
        Capability::DeleteClubs => can_delete_clubs(role),
        Capability::CreateEvents => can_create_events(role),
        Capability::JoinEvents => can_join_events(role),
        Capability::GenerateReports => can_generate_reports(role),
        Capability::ExportReports => can_export_reports(role),
        Capability::ViewStatistics => can_view_statistics(role),
        Capability::GlobalSettings => can_access_global_settings(role),
        Capability::Dashboard => true,
        Capability::UserManagement => {
            can_create_users(role) || can_delete_users(role) || can_assign_roles(role)
        }
        Capability::ClubManagement => {
            can_create_clubs(role) || can_delete_clubs(role) || role == Role::Chairman
        }
        Capability::EventManagement => {
            can_create_events(role) || can_edit_events(role, true) || can_delete_events(role, true)
        }
    }
}

/// Caller-side adapter: turn a denied check into an error for `?` flow.
/// The checks themselves never error.
pub fn ensure(allowed: bool, permission: &str) -> Result<(), ClubError> {
    if allowed {
        Ok(())
    } else {
        Err(ClubError::MissingPermission {
            permission: permission.to_string(),
        })
    }
}
