//! Club repository.

use chrono::Utc;
use clubhouse_common::models::Club;
use sqlx::SqlitePool;

/// Create a new club.
pub async fn create_club(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
) -> Result<Club, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Club>(
        r#"
        INSERT INTO clubs (name, description, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a club by ID.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List all clubs.
pub async fn list_clubs(pool: &SqlitePool) -> Result<Vec<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>("SELECT * FROM clubs ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Update club fields.
pub async fn update_club(
    pool: &SqlitePool,
    id: i64,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<Club, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        UPDATE clubs SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(Utc::now())
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a club.
pub async fn delete_club(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM clubs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Check whether a club exists.
pub async fn club_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clubs WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
