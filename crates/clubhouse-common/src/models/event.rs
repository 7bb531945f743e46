//! Event model — scheduled club activities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A club event. Ownership (`created_by`) feeds the TeamLeader-scoped
/// edit/delete checks in `crate::permissions`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,

    /// The club hosting this event
    pub club_id: i64,

    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,

    /// When the event takes place
    pub starts_at: DateTime<Utc>,

    /// The user who created the event
    pub created_by: i64,

    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the given user created this event.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.created_by == user_id
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    pub starts_at: DateTime<Utc>,
}
