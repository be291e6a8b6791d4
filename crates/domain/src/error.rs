//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `From`. Messages are part of the contract: the
//! HTTP adapter forwards them to clients verbatim for every variant except
//! [`InventoryError::Storage`].

use crate::device::DeviceState;

/// Top-level error returned by domain operations, use-cases and ports.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Caller supplied malformed or incomplete input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The operation is well-formed but forbidden by the current state.
    #[error(transparent)]
    StateConflict(#[from] StateConflictError),

    /// Anything raised by an infrastructure adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that can be fixed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("name cannot be blank")]
    BlankName,

    #[error("brand is required")]
    MissingBrand,

    #[error("brand cannot be blank")]
    BlankBrand,

    #[error("state is required")]
    MissingState,

    #[error("unknown device state `{0}`, expected one of {states}", states = DeviceState::LITERALS.join(", "))]
    UnknownState(String),

    #[error("invalid device id `{0}`")]
    InvalidId(String),

    #[error("malformed request: {0}")]
    MalformedPayload(String),

    /// A state conflict surfaced by a use-case as a validation failure.
    #[error(transparent)]
    Conflict(#[from] StateConflictError),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found with id: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Mutations rejected because the device is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateConflictError {
    #[error("cannot update name or brand for device in use")]
    DetailsLocked,

    #[error("cannot delete device that is in use")]
    DeleteInUse,
}
