//! Device: a managed inventory item with a name, a brand and a state.
//!
//! A device starts without an identifier; the persistence adapter assigns
//! one on first save. Name and brand are locked while the device is
//! [`DeviceState::InUse`], and an in-use device cannot be deleted.

mod state;

pub use state::DeviceState;

use serde::Serialize;

use crate::error::{InventoryError, StateConflictError, ValidationError};
use crate::id::DeviceId;
use crate::time::{Timestamp, now};

/// An inventory item.
///
/// Fields are private so that `id` and `creation_time` cannot change once
/// set; use the accessors to read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    id: Option<DeviceId>,
    name: String,
    brand: String,
    state: DeviceState,
    creation_time: Timestamp,
}

impl Device {
    /// Create a builder for constructing a new [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Shorthand for a builder with every field set.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] when `name` or `brand` is blank.
    pub fn create(
        name: impl Into<String>,
        brand: impl Into<String>,
        state: DeviceState,
    ) -> Result<Self, InventoryError> {
        Self::builder().name(name).brand(brand).state(state).build()
    }

    /// Rehydrate a device from a persisted record.
    ///
    /// No validation is performed: the record is trusted to have been valid
    /// when it was written. Only persistence adapters should call this.
    #[must_use]
    pub fn from_storage(
        id: DeviceId,
        name: String,
        brand: String,
        state: DeviceState,
        creation_time: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            brand,
            state,
            creation_time,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<DeviceId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    #[must_use]
    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }

    /// Move the device to `new_state`. Every transition is allowed.
    pub fn update_state(&mut self, new_state: DeviceState) {
        self.state = new_state;
    }

    /// Change name and/or brand. `None` leaves the field untouched.
    ///
    /// Nothing is modified unless every supplied value is valid.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::StateConflict`] when the device is in use,
    /// or [`InventoryError::Validation`] when a supplied value is blank.
    pub fn update_details(
        &mut self,
        new_name: Option<String>,
        new_brand: Option<String>,
    ) -> Result<(), InventoryError> {
        if self.state.is_in_use() {
            return Err(StateConflictError::DetailsLocked.into());
        }
        if new_name.as_deref().is_some_and(is_blank) {
            return Err(ValidationError::BlankName.into());
        }
        if new_brand.as_deref().is_some_and(is_blank) {
            return Err(ValidationError::BlankBrand.into());
        }

        if let Some(name) = new_name {
            self.name = name;
        }
        if let Some(brand) = new_brand {
            self.brand = brand;
        }
        Ok(())
    }

    /// Whether the device may be removed from the inventory.
    #[must_use]
    pub fn can_be_deleted(&self) -> bool {
        !self.state.is_in_use()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Step-by-step builder for a new, not yet persisted [`Device`].
///
/// An unset field is reported as missing by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    name: Option<String>,
    brand: Option<String>,
    state: Option<DeviceState>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: DeviceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Consume the builder, validate, and return a [`Device`] stamped with
    /// the current time.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] when:
    /// - `name` is missing ([`ValidationError::MissingName`]) or blank ([`ValidationError::BlankName`])
    /// - `brand` is missing ([`ValidationError::MissingBrand`]) or blank ([`ValidationError::BlankBrand`])
    /// - `state` is missing ([`ValidationError::MissingState`])
    pub fn build(self) -> Result<Device, InventoryError> {
        let name = self.name.ok_or(ValidationError::MissingName)?;
        let brand = self.brand.ok_or(ValidationError::MissingBrand)?;
        let state = self.state.ok_or(ValidationError::MissingState)?;

        if is_blank(&name) {
            return Err(ValidationError::BlankName.into());
        }
        if is_blank(&brand) {
            return Err(ValidationError::BlankBrand.into());
        }

        Ok(Device {
            id: None,
            name,
            brand,
            state,
            creation_time: now(),
        })
    }
}
