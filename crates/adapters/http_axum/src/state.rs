//! Shared application state for axum handlers.

use std::sync::Arc;

use inventory_app::ports::{DeviceRepository, ReadinessProbe};
use inventory_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the device repository and the readiness probe to avoid
/// dynamic dispatch. `Clone` is implemented manually so only the `Arc`
/// wrappers are cloned.
pub struct AppState<DR, RP> {
    /// Device use-cases.
    pub device_service: Arc<DeviceService<DR>>,
    /// Dependency checked by `/health/ready`.
    pub readiness: Arc<RP>,
}

impl<DR, RP> Clone for AppState<DR, RP> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            readiness: Arc::clone(&self.readiness),
        }
    }
}

impl<DR, RP> AppState<DR, RP>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    /// Create a new application state from owned parts.
    pub fn new(device_service: DeviceService<DR>, readiness: RP) -> Self {
        Self {
            device_service: Arc::new(device_service),
            readiness: Arc::new(readiness),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` parts.
    pub fn from_arcs(device_service: Arc<DeviceService<DR>>, readiness: Arc<RP>) -> Self {
        Self {
            device_service,
            readiness,
        }
    }
}
