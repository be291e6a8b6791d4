//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::get;

use inventory_app::ports::{DeviceRepository, ReadinessProbe};

use crate::state::AppState;

/// Build the versioned API sub-router, mounted under `/api/v1`.
pub fn routes<DR, RP>() -> Router<AppState<DR, RP>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/devices",
            get(devices::list::<DR, RP>).post(devices::create::<DR, RP>),
        )
        .route(
            "/devices/{id}",
            get(devices::get::<DR, RP>)
                .put(devices::update::<DR, RP>)
                .delete(devices::delete::<DR, RP>),
        )
}
