//! Liveness and readiness probes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use inventory_app::ports::{DeviceRepository, ReadinessProbe};

use crate::error::error_chain;
use crate::state::AppState;

const LIVENESS_CHECK: &str = "Devices API is alive";

/// Outcome of a single check or of the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

/// Extra information attached to a failed check.
#[derive(Debug, Serialize)]
pub struct CheckData {
    pub error: String,
}

/// A named check result.
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CheckData>,
}

/// Body returned by `/health/live` and `/health/ready`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: Status,
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    fn single(check: HealthCheck) -> Self {
        Self {
            status: check.status,
            checks: vec![check],
        }
    }
}

/// `GET /health/live`
pub async fn live() -> Json<HealthReport> {
    Json(HealthReport::single(HealthCheck {
        name: LIVENESS_CHECK,
        status: Status::Up,
        data: None,
    }))
}

/// `GET /health/ready`
///
/// Responds `503 Service Unavailable` when the probe fails.
pub async fn ready<DR, RP>(
    State(state): State<AppState<DR, RP>>,
) -> (StatusCode, Json<HealthReport>)
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let name = state.readiness.name();
    match state.readiness.check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthReport::single(HealthCheck {
                name,
                status: Status::Up,
                data: None,
            })),
        ),
        Err(err) => {
            let error = error_chain(&err);
            tracing::warn!(check = name, %error, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport::single(HealthCheck {
                    name,
                    status: Status::Down,
                    data: Some(CheckData { error }),
                })),
            )
        }
    }
}
