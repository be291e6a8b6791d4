//! Device service: use-cases for managing the device inventory.

use inventory_domain::device::{Device, DeviceState};
use inventory_domain::error::{InventoryError, NotFoundError, StateConflictError, ValidationError};
use inventory_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Input for [`DeviceService::create_device`].
///
/// Fields are optional so that absent input is reported by the domain as
/// a missing field instead of being rejected by the transport layer.
#[derive(Debug, Clone, Default)]
pub struct CreateDevice {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

/// Partial update for [`DeviceService::update_device`].
///
/// `None` means "leave unchanged". `Some(String::new())` is an explicit
/// empty value and is rejected as blank.
#[derive(Debug, Clone, Default)]
pub struct UpdateDevice {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

impl UpdateDevice {
    fn touches_details(&self) -> bool {
        self.name.is_some() || self.brand.is_some()
    }
}

/// Filter for [`DeviceService::list_devices`].
///
/// A non-blank `brand` wins over `state`; `state` wins over listing
/// everything. Filters are never combined.
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

/// Application service for the device lifecycle.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Build a new device from `input` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if a field is missing or blank,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, input), fields(name = ?input.name, brand = ?input.brand))]
    pub async fn create_device(&self, input: CreateDevice) -> Result<Device, InventoryError> {
        let mut builder = Device::builder();
        if let Some(name) = input.name {
            builder = builder.name(name);
        }
        if let Some(brand) = input.brand {
            builder = builder.brand(brand);
        }
        if let Some(state) = input.state {
            builder = builder.state(state);
        }

        let device = self.repo.save(builder.build()?).await?;
        tracing::info!(id = ?device.id(), "device created");
        Ok(device)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, InventoryError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Apply a partial update to an existing device.
    ///
    /// Details are changed before the state, so a request that both renames
    /// an in-use device and releases it is still rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if the device does not exist, or
    /// [`InventoryError::Validation`] when the domain rejects the change.
    /// State conflicts are reported as [`ValidationError::Conflict`].
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        changes: UpdateDevice,
    ) -> Result<Device, InventoryError> {
        let mut device = self.get_device(id).await?;

        if changes.touches_details() {
            device
                .update_details(changes.name, changes.brand)
                .map_err(conflict_as_validation)?;
        }
        if let Some(state) = changes.state {
            device.update_state(state);
        }

        self.repo.save(device).await
    }

    /// List devices, narrowed by at most one filter.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, filter), fields(brand = ?filter.brand, state = ?filter.state))]
    pub async fn list_devices(&self, filter: DeviceFilter) -> Result<Vec<Device>, InventoryError> {
        match filter {
            DeviceFilter {
                brand: Some(brand), ..
            } if !brand.trim().is_empty() => self.repo.find_by_brand(&brand).await,
            DeviceFilter {
                state: Some(state), ..
            } => self.repo.find_by_state(state).await,
            DeviceFilter { .. } => self.repo.find_all().await,
        }
    }

    /// Delete a device unless it is in use.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if the device does not exist,
    /// [`InventoryError::StateConflict`] if it is in use, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), InventoryError> {
        let device = self.get_device(id).await?;
        if !device.can_be_deleted() {
            return Err(StateConflictError::DeleteInUse.into());
        }
        self.repo.delete(&device).await?;
        tracing::info!(%id, "device deleted");
        Ok(())
    }
}

fn conflict_as_validation(err: InventoryError) -> InventoryError {
    match err {
        InventoryError::StateConflict(conflict) => ValidationError::Conflict(conflict).into(),
        other => other,
    }
}
