//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use inventory_app::ports::{DeviceRepository, ReadinessProbe};
use inventory_app::services::device_service::{CreateDevice, DeviceFilter, UpdateDevice};
use inventory_domain::device::{Device, DeviceState};
use inventory_domain::error::ValidationError;
use inventory_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a device.
///
/// Every field is optional here so that a missing field reaches the domain
/// and is reported with its own message.
#[derive(Debug, Deserialize)]
pub struct CreateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Request body for a partial device update.
#[derive(Debug, Deserialize)]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Device>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<DeviceId, ValidationError> {
    DeviceId::from_str(raw)
}

fn parse_state(raw: Option<&str>) -> Result<Option<DeviceState>, ValidationError> {
    raw.map(DeviceState::from_str).transpose()
}

/// `GET /api/v1/devices?brand=&state=`
///
/// Blank query values count as absent.
pub async fn list<DR, RP>(
    State(state): State<AppState<DR, RP>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let Query(query) = query?;
    let filter = DeviceFilter {
        brand: query.brand,
        state: parse_state(query.state.as_deref().filter(|s| !s.trim().is_empty()))?,
    };
    let devices = state.device_service.list_devices(filter).await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/v1/devices/{id}`
pub async fn get<DR, RP>(
    State(state): State<AppState<DR, RP>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let Path(id) = path?;
    let device = state.device_service.get_device(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/v1/devices`
pub async fn create<DR, RP>(
    State(state): State<AppState<DR, RP>>,
    payload: Result<Json<CreateDeviceRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let input = CreateDevice {
        name: req.name,
        brand: req.brand,
        state: parse_state(req.state.as_deref())?,
    };
    let device = state.device_service.create_device(input).await?;
    Ok(CreateResponse::Created(Json(device)))
}

/// `PUT /api/v1/devices/{id}`
///
/// Absent fields are left unchanged.
pub async fn update<DR, RP>(
    State(state): State<AppState<DR, RP>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateDeviceRequest>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let Path(id) = path?;
    let id = parse_id(&id)?;
    let Json(req) = payload?;
    let changes = UpdateDevice {
        name: req.name,
        brand: req.brand,
        state: parse_state(req.state.as_deref())?,
    };
    let device = state.device_service.update_device(id, changes).await?;
    Ok(UpdateResponse::Ok(Json(device)))
}

/// `DELETE /api/v1/devices/{id}`
pub async fn delete<DR, RP>(
    State(state): State<AppState<DR, RP>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    let Path(id) = path?;
    state.device_service.delete_device(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}
