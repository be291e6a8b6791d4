//! `SQLite` implementation of [`ReadinessProbe`].

use sqlx::SqlitePool;

use inventory_app::ports::ReadinessProbe;
use inventory_domain::error::InventoryError;

use crate::error::StorageError;

/// Checks that the connection pool can still run a query.
pub struct SqliteReadinessProbe {
    pool: SqlitePool,
}

impl SqliteReadinessProbe {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadinessProbe for SqliteReadinessProbe {
    fn name(&self) -> &'static str {
        "Database connection"
    }

    async fn check(&self) -> Result<(), InventoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }
}
