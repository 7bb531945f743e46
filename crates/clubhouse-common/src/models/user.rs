//! User model — the identity layer.
//!
//! A user carries exactly one role and belongs to at most one club.
//! Leadership changes mutate `role` and `club_id` in place; users are never
//! created or deleted by the leadership workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// A Clubhouse user account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,

    /// Unique username
    pub username: String,

    /// Display name (optional, up to 64 chars)
    pub display_name: Option<String>,

    /// Argon2id password hash — never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// The user's rank (platform-wide or within their club)
    pub role: Role,

    /// The club this user belongs to, if any. Unassigned admins carry `None`.
    pub club_id: Option<i64>,

    /// Inactive accounts fail every authorization check
    pub active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user belongs to the given club.
    pub fn is_member_of(&self, club_id: i64) -> bool {
        self.club_id == Some(club_id)
    }
}
