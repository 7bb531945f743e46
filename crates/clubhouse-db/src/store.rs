//! SQLite-backed implementation of the `UserStore` collaborator.
//!
//! `save_batch` runs inside one transaction, which is what keeps the
//! Chairman swap from ever exposing a two-Chairman state to readers.

use chrono::Utc;
use sqlx::SqlitePool;

use clubhouse_common::error::ClubResult;
use clubhouse_common::models::User;
use clubhouse_core::store::UserStore;

use crate::repository::{clubs, users};

#[derive(Clone)]
pub struct SqlUserStore {
    pool: SqlitePool,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserStore for SqlUserStore {
    async fn find_by_id(&self, id: i64) -> ClubResult<Option<User>> {
        Ok(users::find_by_id(&self.pool, id).await?)
    }

    async fn find_chairman(&self, club_id: i64) -> ClubResult<Option<User>> {
        Ok(users::find_chairman(&self.pool, club_id).await?)
    }

    async fn club_exists(&self, club_id: i64) -> ClubResult<bool> {
        Ok(clubs::club_exists(&self.pool, club_id).await?)
    }

    async fn save(&self, user: &User) -> ClubResult<()> {
        users::update_membership(&self.pool, user.id, user.role, user.club_id).await?;
        Ok(())
    }

    async fn save_batch(&self, batch: &[User]) -> ClubResult<()> {
        let mut tx = self.pool.begin().await?;
        for user in batch {
            sqlx::query("UPDATE users SET role = ?, club_id = ?, updated_at = ? WHERE id = ?")
                .bind(user.role)
                .bind(user.club_id)
                .bind(Utc::now())
                .bind(user.id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
