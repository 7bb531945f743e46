//! User repository — CRUD operations for user accounts and club membership.

use chrono::Utc;
use clubhouse_common::models::{Role, User};
use sqlx::SqlitePool;

/// Create a new user account.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    display_name: Option<&str>,
    password_hash: &str,
    role: Role,
    club_id: Option<i64>,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, display_name, password_hash, role, club_id, active, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, 1, ?, ?)
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(display_name)
    .bind(password_hash)
    .bind(role)
    .bind(club_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a user by their unique ID.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find a user by username (case-insensitive).
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER(?)")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// The club's current Chairman, if one exists.
pub async fn find_chairman(
    pool: &SqlitePool,
    club_id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE club_id = ? AND role = ?")
        .bind(club_id)
        .bind(Role::Chairman)
        .fetch_optional(pool)
        .await
}

/// List members of a club.
pub async fn list_club_members(
    pool: &SqlitePool,
    club_id: i64,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE club_id = ? ORDER BY username")
        .bind(club_id)
        .fetch_all(pool)
        .await
}

/// Update a user's rank and club affiliation.
pub async fn update_membership(
    pool: &SqlitePool,
    id: i64,
    role: Role,
    club_id: Option<i64>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET role = ?, club_id = ?, updated_at = ? WHERE id = ?")
        .bind(role)
        .bind(club_id)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Activate or deactivate an account.
pub async fn set_active(pool: &SqlitePool, id: i64, active: bool) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET active = ?, updated_at = ? WHERE id = ?")
        .bind(active)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Count active users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE active = 1")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
