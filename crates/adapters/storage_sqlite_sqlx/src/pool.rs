//! Opening the device database and bringing its schema up to date.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Where the device database lives.
pub struct Config {
    /// `sqlx` `SQLite` URL, e.g. `sqlite:inventory.db?mode=rwc` or `sqlite::memory:`.
    pub database_url: String,
}

impl Config {
    /// Open the database, creating the file when needed, and apply every
    /// pending migration before handing out the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is rejected, the database cannot
    /// be opened, or a migration fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::open(&self.database_url).await
    }
}

/// An open, migrated device database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn open(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database is dropped with its last connection.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await?;
        tracing::debug!(
            migrations = MIGRATOR.iter().count(),
            "device database ready"
        );

        Ok(Self { pool })
    }

    /// Pool shared by the repository and the readiness probe.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_devices_table_on_open() {
        let db = memory_db().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, vec!["devices"]);
    }

    #[tokio::test]
    async fn should_index_brand_and_state() {
        let db = memory_db().await;

        let indexes: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'devices' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        assert_eq!(indexes.len(), 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_state_at_table_level() {
        let db = memory_db().await;

        let result =
            sqlx::query("INSERT INTO devices (name, brand, state) VALUES ('a', 'b', 'BROKEN')")
                .execute(db.pool())
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_not_reapply_migrations_when_run_twice() {
        let db = memory_db().await;

        MIGRATOR.run(db.pool()).await.unwrap();

        let applied: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(applied.0, 1);
    }
}
