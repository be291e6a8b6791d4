//! Health port: lets the HTTP layer ask whether backing services respond.

use std::future::Future;

use inventory_domain::error::InventoryError;

/// Reports whether the service is ready to take traffic.
pub trait ReadinessProbe {
    /// Name reported alongside the check result.
    fn name(&self) -> &'static str;

    /// Succeeds when the dependency answered a trivial request.
    fn check(&self) -> impl Future<Output = Result<(), InventoryError>> + Send;
}
