//! # clubhouse-db
//!
//! Storage adapter for Clubhouse — SQLite via sqlx. Provides connection
//! management, migrations, repository query functions, and the SQL-backed
//! implementation of the `UserStore` collaborator consumed by
//! `clubhouse-core`.

pub mod repository;
pub mod store;

use anyhow::Result;
use sqlx::SqlitePool;

use clubhouse_common::config::AppConfig;
use clubhouse_common::error::{ClubError, ClubResult};
use clubhouse_common::models::{Club, User};

pub use store::SqlUserStore;

/// Shared database handle.
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Open the connection pool described by the application config.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        tracing::info!(url = %config.database.url, "Connecting to SQLite...");
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        tracing::info!("Connected to SQLite");
        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Load a user, mapping absence to [`ClubError::NotFound`].
    pub async fn user(&self, id: i64) -> ClubResult<User> {
        repository::users::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ClubError::NotFound {
                resource: "user".into(),
            })
    }

    /// Load a club, mapping absence to [`ClubError::NotFound`].
    pub async fn club(&self, id: i64) -> ClubResult<Club> {
        repository::clubs::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ClubError::NotFound {
                resource: "club".into(),
            })
    }
}
