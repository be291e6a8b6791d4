//! Storage port: repository trait for device persistence.

use std::future::Future;

use inventory_domain::device::{Device, DeviceState};
use inventory_domain::error::InventoryError;
use inventory_domain::id::DeviceId;

/// Repository for persisting and querying [`Device`]s.
///
/// Implementations own identifier generation: a device saved without an id
/// comes back with one. Result sets are ordered by id.
pub trait DeviceRepository {
    /// Insert `device` when it has no id, otherwise update its name, brand
    /// and state. Returns the stored device.
    fn save(&self, device: Device) -> impl Future<Output = Result<Device, InventoryError>> + Send;

    /// Get a device by its identifier.
    fn find_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, InventoryError>> + Send;

    /// Get all devices.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send;

    /// Get the devices whose brand matches `brand` exactly.
    fn find_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send;

    /// Get the devices currently in `state`.
    fn find_by_state(
        &self,
        state: DeviceState,
    ) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send;

    /// Remove the stored record of `device`. Absent records are ignored.
    fn delete(&self, device: &Device) -> impl Future<Output = Result<(), InventoryError>> + Send;
}
