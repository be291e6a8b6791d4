//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use inventory_app::ports::{DeviceRepository, ReadinessProbe};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the device API under `/api/v1` and the health probes under
/// `/health`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level.
pub fn build<DR, RP>(state: AppState<DR, RP>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    RP: ReadinessProbe + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(crate::health::live))
        .route("/health/ready", get(crate::health::ready::<DR, RP>))
        .nest("/api/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use inventory_app::services::device_service::DeviceService;
    use inventory_domain::device::{Device, DeviceState};
    use inventory_domain::error::InventoryError;
    use inventory_domain::id::DeviceId;
    use serde_json::Value;
    use std::future::Future;
    use tower::ServiceExt;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    /// Holds at most one device, with id 1.
    struct StubDeviceRepo {
        device: Option<Device>,
    }

    impl StubDeviceRepo {
        fn empty() -> Self {
            Self { device: None }
        }

        fn with(state: DeviceState) -> Self {
            Self {
                device: Some(Device::from_storage(
                    DeviceId::from_raw(1),
                    "iPhone 15".to_string(),
                    "Apple".to_string(),
                    state,
                    inventory_domain::time::now(),
                )),
            }
        }
    }

    impl DeviceRepository for StubDeviceRepo {
        async fn save(&self, device: Device) -> Result<Device, InventoryError> {
            Ok(device)
        }
        async fn find_by_id(&self, id: DeviceId) -> Result<Option<Device>, InventoryError> {
            Ok(self.device.clone().filter(|d| d.id() == Some(id)))
        }
        async fn find_all(&self) -> Result<Vec<Device>, InventoryError> {
            Ok(self.device.clone().into_iter().collect())
        }
        async fn find_by_brand(&self, _brand: &str) -> Result<Vec<Device>, InventoryError> {
            Ok(vec![])
        }
        async fn find_by_state(&self, _state: DeviceState) -> Result<Vec<Device>, InventoryError> {
            Ok(vec![])
        }
        async fn delete(&self, _device: &Device) -> Result<(), InventoryError> {
            Ok(())
        }
    }

    struct BrokenDeviceRepo;

    impl DeviceRepository for BrokenDeviceRepo {
        fn save(
            &self,
            _device: Device,
        ) -> impl Future<Output = Result<Device, InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
        fn find_by_id(
            &self,
            _id: DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
        fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
        fn find_by_brand(
            &self,
            _brand: &str,
        ) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
        fn find_by_state(
            &self,
            _state: DeviceState,
        ) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
        fn delete(
            &self,
            _device: &Device,
        ) -> impl Future<Output = Result<(), InventoryError>> + Send {
            async { Err(InventoryError::Storage(Box::new(Refused))) }
        }
    }

    struct StubProbe {
        healthy: bool,
    }

    impl ReadinessProbe for StubProbe {
        fn name(&self) -> &'static str {
            "Database connection"
        }

        async fn check(&self) -> Result<(), InventoryError> {
            if self.healthy {
                Ok(())
            } else {
                Err(InventoryError::Storage(Box::new(Refused)))
            }
        }
    }

    fn app<DR>(repo: DR, healthy: bool) -> Router
    where
        DR: DeviceRepository + Send + Sync + 'static,
    {
        build(AppState::new(
            DeviceService::new(repo),
            StubProbe { healthy },
        ))
    }

    fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app(StubDeviceRepo::empty(), true)
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn should_report_alive() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/health/live", None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "UP");
        assert_eq!(body["checks"][0]["name"], "Devices API is alive");
        assert_eq!(body["checks"][0]["status"], "UP");
    }

    #[tokio::test]
    async fn should_report_ready_when_probe_succeeds() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/health/ready", None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "UP");
        assert_eq!(body["checks"][0]["name"], "Database connection");
        assert!(body["checks"][0].get("data").is_none());
    }

    #[tokio::test]
    async fn should_report_unavailable_when_probe_fails() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), false),
            request("GET", "/health/ready", None),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "DOWN");
        assert_eq!(body["checks"][0]["status"], "DOWN");
        assert_eq!(
            body["checks"][0]["data"]["error"],
            "storage error: connection refused"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_with_message_when_device_missing() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/api/v1/devices/999", None),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Device not found with id: 999");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_numeric() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/api/v1/devices/abc", None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_body_is_not_json() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("POST", "/api/v1/devices", Some("{not json")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("malformed request")
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_when_name_missing() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request(
                "POST",
                "/api/v1/devices",
                Some(r#"{"brand":"Apple","state":"AVAILABLE"}"#),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "name is required");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_state_unknown() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/api/v1/devices?state=BROKEN", None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("BROKEN"));
    }

    #[tokio::test]
    async fn should_return_json_error_when_query_string_is_malformed() {
        let (status, body) = send(
            app(StubDeviceRepo::empty(), true),
            request("GET", "/api/v1/devices?brand=a&brand=b", None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("malformed request")
        );
    }

    #[tokio::test]
    async fn should_reject_delete_of_in_use_device() {
        let (status, body) = send(
            app(StubDeviceRepo::with(DeviceState::InUse), true),
            request("DELETE", "/api/v1/devices/1", None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "cannot delete device that is in use");
    }

    #[tokio::test]
    async fn should_return_no_content_when_deleting_available_device() {
        let response = app(StubDeviceRepo::with(DeviceState::Available), true)
            .oneshot(request("DELETE", "/api/v1/devices/1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_reject_renaming_in_use_device() {
        let (status, body) = send(
            app(StubDeviceRepo::with(DeviceState::InUse), true),
            request("PUT", "/api/v1/devices/1", Some(r#"{"name":"Renamed"}"#)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "cannot update name or brand for device in use"
        );
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_generic_message() {
        let (status, body) = send(
            app(BrokenDeviceRepo, true),
            request("GET", "/api/v1/devices", None),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(
            body["message"],
            "An unexpected error occurred. Please try again later."
        );
    }
}
