//! `SQLite` implementation of [`DeviceRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use inventory_app::ports::DeviceRepository;
use inventory_domain::device::{Device, DeviceState};
use inventory_domain::error::{InventoryError, NotFoundError};
use inventory_domain::id::DeviceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }

    fn all(values: Vec<Self>) -> Vec<Device> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let brand: String = row.try_get("brand")?;
        let state: String = row.try_get("state")?;
        let creation_time: String = row.try_get("creation_time")?;

        let state =
            DeviceState::from_str(&state).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let creation_time = chrono::DateTime::parse_from_rfc3339(&creation_time)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Device::from_storage(
            DeviceId::from_raw(id),
            name,
            brand,
            state,
            creation_time,
        )))
    }
}

const INSERT: &str =
    "INSERT INTO devices (name, brand, state, creation_time) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, brand, state, creation_time FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, brand, state, creation_time FROM devices ORDER BY id";
const SELECT_BY_BRAND: &str =
    "SELECT id, name, brand, state, creation_time FROM devices WHERE brand = ? ORDER BY id";
const SELECT_BY_STATE: &str =
    "SELECT id, name, brand, state, creation_time FROM devices WHERE state = ? ORDER BY id";
// creation_time is write-once.
const UPDATE: &str = "UPDATE devices SET name = ?, brand = ?, state = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(&self, device: Device) -> Result<Device, InventoryError> {
        let result = sqlx::query(INSERT)
            .bind(device.name())
            .bind(device.brand())
            .bind(device.state().as_str())
            .bind(device.creation_time().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let id = DeviceId::from_raw(result.last_insert_rowid());
        tracing::debug!(%id, "inserted device row");

        Ok(Device::from_storage(
            id,
            device.name().to_string(),
            device.brand().to_string(),
            device.state(),
            device.creation_time(),
        ))
    }

    async fn update(&self, id: DeviceId, device: Device) -> Result<Device, InventoryError> {
        let result = sqlx::query(UPDATE)
            .bind(device.name())
            .bind(device.brand())
            .bind(device.state().as_str())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into());
        }

        Ok(device)
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    async fn save(&self, device: Device) -> Result<Device, InventoryError> {
        match device.id() {
            None => self.insert(device).await,
            Some(id) => self.update(id, device).await,
        }
    }

    async fn find_by_id(&self, id: DeviceId) -> Result<Option<Device>, InventoryError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find_all(&self) -> Result<Vec<Device>, InventoryError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::all(rows))
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Device>, InventoryError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_BRAND)
            .bind(brand)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::all(rows))
    }

    async fn find_by_state(&self, state: DeviceState) -> Result<Vec<Device>, InventoryError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
            .bind(state.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::all(rows))
    }

    async fn delete(&self, device: &Device) -> Result<(), InventoryError> {
        let Some(id) = device.id() else {
            return Ok(());
        };

        sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
