//! Event repository.

use chrono::{DateTime, Utc};
use clubhouse_common::models::Event;
use sqlx::SqlitePool;

/// Create a new event.
pub async fn create_event(
    pool: &SqlitePool,
    club_id: i64,
    title: &str,
    description: Option<&str>,
    location: Option<&str>,
    starts_at: DateTime<Utc>,
    created_by: i64,
) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (club_id, title, description, location, starts_at, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(club_id)
    .bind(title)
    .bind(description)
    .bind(location)
    .bind(starts_at)
    .bind(created_by)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Find an event by ID.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List a club's events, soonest first.
pub async fn list_club_events(
    pool: &SqlitePool,
    club_id: i64,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE club_id = ? ORDER BY starts_at")
        .bind(club_id)
        .fetch_all(pool)
        .await
}

/// Delete an event.
pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
